use serde::{Deserialize, Serialize};

use crate::models::domain::{deserialize_document_id, null_as_default};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id", deserialize_with = "deserialize_document_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub course_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub course_name: String,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub semester: i32,
    #[serde(default)]
    pub batch_year: Option<String>,
}

impl Course {
    pub fn new(id: &str, course_code: &str, course_name: &str) -> Self {
        Course {
            id: id.to_string(),
            course_code: course_code.to_string(),
            course_name: course_name.to_string(),
            instructor: None,
            description: None,
            department: None,
            semester: 0,
            batch_year: None,
        }
    }
}
