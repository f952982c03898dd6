pub mod course;
pub mod generation;
pub mod mcq_question;
pub mod reference_context;
pub mod study_material;
pub use course::Course;
pub use generation::{GenerationRequest, GenerationResult, QuestionCount};
pub use mcq_question::{McqQuestion, QuestionOption};
pub use reference_context::ReferenceContext;
pub use study_material::{DocumentType, ReferenceDocument, StudyMaterial};

use mongodb::bson::Bson;
use serde::{Deserialize, Deserializer};

/// Stored ids are either ObjectIds or plain strings depending on who wrote the document.
pub(crate) fn deserialize_document_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Bson::deserialize(deserializer)?;
    Ok(match value {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    })
}

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
