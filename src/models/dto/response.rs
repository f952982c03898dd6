use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{GenerationResult, McqQuestion};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct McqResponseDto {
    pub course_id: String,
    pub questions: Vec<McqQuestion>,
    pub reference_documents: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl From<GenerationResult> for McqResponseDto {
    fn from(result: GenerationResult) -> Self {
        McqResponseDto {
            course_id: result.course_id,
            questions: result.questions,
            reference_documents: result.reference_documents,
            generated_at: result.generated_at,
        }
    }
}
