use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::{AppError, AppResult};
use crate::models::domain::McqQuestion;

pub const DEFAULT_QUESTION_COUNT: usize = 15;
pub const MAX_QUESTION_COUNT: usize = 30;

/// Requested question count, clamped to `1..=30` before generation.
/// Non-positive requests fall back to 15.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionCount(usize);

impl QuestionCount {
    pub fn from_requested(requested: i64) -> Self {
        if requested <= 0 {
            QuestionCount(DEFAULT_QUESTION_COUNT)
        } else if requested as u64 > MAX_QUESTION_COUNT as u64 {
            QuestionCount(MAX_QUESTION_COUNT)
        } else {
            QuestionCount(requested as usize)
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for QuestionCount {
    fn default() -> Self {
        QuestionCount(DEFAULT_QUESTION_COUNT)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    pub course_id: String,
    pub topics: Vec<String>,
    pub question_count: QuestionCount,
}

impl GenerationRequest {
    pub fn new(course_id: &str, topics: Vec<String>, requested_count: i64) -> AppResult<Self> {
        let course_id = course_id.trim();
        if course_id.is_empty() {
            return Err(AppError::ValidationError(
                "Course id cannot be empty".to_string(),
            ));
        }

        let topics: Vec<String> = topics
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if topics.is_empty() {
            return Err(AppError::ValidationError(
                "At least one topic is required".to_string(),
            ));
        }

        Ok(GenerationRequest {
            course_id: course_id.to_string(),
            topics,
            question_count: QuestionCount::from_requested(requested_count),
        })
    }

    pub fn topic_list(&self) -> String {
        self.topics.join(", ")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub course_id: String,
    pub questions: Vec<McqQuestion>,
    /// Papers whose text grounded the prompt, in listing order.
    pub reference_documents: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl GenerationResult {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
