use crate::{
    errors::{AppError, AppResult},
    models::domain::McqQuestion,
};

/// How entries that break the four-options/one-correct shape are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OptionPolicy {
    /// Drop malformed entries.
    #[default]
    Strict,
    /// Keep entries exactly as the model produced them.
    Lenient,
}

/// Parses the repaired reply into questions and cuts the list to
/// `requested_count`. Shorter lists are returned as they are.
pub fn validate_questions(
    json_text: &str,
    requested_count: usize,
    policy: OptionPolicy,
) -> AppResult<Vec<McqQuestion>> {
    let parsed: Vec<McqQuestion> =
        serde_json::from_str(json_text).map_err(|e| AppError::GenerationParseError {
            message: e.to_string(),
            raw_response: json_text.to_string(),
        })?;

    let parsed_count = parsed.len();
    let mut questions: Vec<McqQuestion> = match policy {
        OptionPolicy::Lenient => parsed,
        OptionPolicy::Strict => parsed
            .into_iter()
            .enumerate()
            .filter_map(|(index, question)| match rejection_reason(&question) {
                Some(reason) => {
                    log::warn!("Dropping generated question #{}: {}", index + 1, reason);
                    None
                }
                None => Some(question),
            })
            .collect(),
    };

    if questions.len() > requested_count {
        questions.truncate(requested_count);
    }

    log::debug!(
        "Validated {} of {} generated questions (requested {})",
        questions.len(),
        parsed_count,
        requested_count
    );

    Ok(questions)
}

fn rejection_reason(question: &McqQuestion) -> Option<String> {
    if question.question.trim().is_empty() {
        return Some("missing question text".to_string());
    }
    if !question.is_well_formed() {
        return Some(format!(
            "expected 4 non-empty options with exactly one correct, got {} options with {} correct",
            question.options.len(),
            question.correct_option_count()
        ));
    }
    None
}
