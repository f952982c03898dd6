use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::errors::AppResult;
use crate::models::domain::GenerationRequest;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMcqRequestDto {
    #[validate(length(min = 1, max = 100))]
    pub course_id: String,

    #[validate(
        length(min = 1, message = "At least one topic is required"),
        custom(function = "validate_topics")
    )]
    pub topics: Vec<String>,

    // Missing or non-positive counts fall back to the default.
    #[serde(default)]
    pub number_of_questions: Option<i64>,
}

fn validate_topics(topics: &[String]) -> Result<(), ValidationError> {
    if topics.iter().any(|t| t.trim().is_empty()) {
        return Err(ValidationError::new("blank_topic"));
    }
    Ok(())
}

impl GenerateMcqRequestDto {
    pub fn into_generation_request(self) -> AppResult<GenerationRequest> {
        self.validate()?;
        GenerationRequest::new(
            &self.course_id,
            self.topics,
            self.number_of_questions.unwrap_or(0),
        )
    }
}
