use std::fmt;

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::models::domain::{deserialize_document_id, null_as_default};

/// An uploaded course material as stored in the material collection.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyMaterial {
    #[serde(rename = "_id", deserialize_with = "deserialize_document_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub course_id: String,
    #[serde(default)]
    pub uploaded_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<DateTime>,
}

impl StudyMaterial {
    pub fn new(course_id: &str, file_name: &str, file_type: &str, file_path: &str) -> Self {
        StudyMaterial {
            id: uuid::Uuid::new_v4().to_string(),
            title: None,
            description: None,
            file_name: file_name.to_string(),
            file_type: file_type.to_string(),
            file_path: file_path.to_string(),
            course_id: course_id.to_string(),
            uploaded_by: None,
            upload_date: Some(DateTime::now()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentType {
    Pdf,
    Txt,
    Other(String),
}

impl DocumentType {
    pub fn parse(declared: &str) -> Self {
        let normalized = declared.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pdf" => DocumentType::Pdf,
            "txt" => DocumentType::Txt,
            _ => DocumentType::Other(normalized),
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentType::Pdf => write!(f, "pdf"),
            DocumentType::Txt => write!(f, "txt"),
            DocumentType::Other(other) => write!(f, "{}", other),
        }
    }
}

/// A candidate grounding document, built from a listed material.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceDocument {
    pub file_name: String,
    pub document_type: DocumentType,
    pub storage_path: String,
}

impl ReferenceDocument {
    pub fn new(file_name: &str, declared_type: &str, storage_path: &str) -> Self {
        ReferenceDocument {
            file_name: file_name.to_string(),
            document_type: DocumentType::parse(declared_type),
            storage_path: storage_path.to_string(),
        }
    }
}

impl From<&StudyMaterial> for ReferenceDocument {
    fn from(material: &StudyMaterial) -> Self {
        ReferenceDocument::new(&material.file_name, &material.file_type, &material.file_path)
    }
}
