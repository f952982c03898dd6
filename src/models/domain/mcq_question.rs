use serde::{Deserialize, Deserializer, Serialize};

use crate::models::domain::null_as_default;

pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct McqQuestion {
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Vec<QuestionOption>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionOption {
    #[serde(default, deserialize_with = "null_as_default")]
    pub option: String,
    #[serde(default, deserialize_with = "deserialize_correct_flag")]
    pub correct: bool,
}

impl QuestionOption {
    pub fn new(option: &str, correct: bool) -> Self {
        QuestionOption {
            option: option.to_string(),
            correct,
        }
    }
}

impl McqQuestion {
    pub fn correct_option_count(&self) -> usize {
        self.options.iter().filter(|o| o.correct).count()
    }

    /// Exactly four non-empty options, exactly one of them correct.
    pub fn is_well_formed(&self) -> bool {
        self.options.len() == OPTIONS_PER_QUESTION
            && self.correct_option_count() == 1
            && self.options.iter().all(|o| !o.option.trim().is_empty())
    }
}

// Models sometimes quote booleans ("true"); accept both forms.
fn deserialize_correct_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(value)) => value,
        Some(Flag::Text(text)) => text.trim().eq_ignore_ascii_case("true"),
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_with(options: Vec<QuestionOption>) -> McqQuestion {
        McqQuestion {
            question: "Which sort is stable?".to_string(),
            options,
            explanation: "Merge sort preserves relative order.".to_string(),
        }
    }

    #[test]
    fn well_formed_question_has_four_options_and_one_correct() {
        let question = question_with(vec![
            QuestionOption::new("Merge sort", true),
            QuestionOption::new("Heap sort", false),
            QuestionOption::new("Quick sort", false),
            QuestionOption::new("Selection sort", false),
        ]);

        assert_eq!(question.correct_option_count(), 1);
        assert!(question.is_well_formed());
    }

    #[test]
    fn question_with_two_correct_options_is_malformed() {
        let question = question_with(vec![
            QuestionOption::new("Merge sort", true),
            QuestionOption::new("Insertion sort", true),
            QuestionOption::new("Quick sort", false),
            QuestionOption::new("Selection sort", false),
        ]);

        assert!(!question.is_well_formed());
    }

    #[test]
    fn question_with_blank_option_is_malformed() {
        let question = question_with(vec![
            QuestionOption::new("Merge sort", true),
            QuestionOption::new("  ", false),
            QuestionOption::new("Quick sort", false),
            QuestionOption::new("Selection sort", false),
        ]);

        assert!(!question.is_well_formed());
    }

    #[test]
    fn correct_flag_accepts_quoted_booleans() {
        let json = r#"{"option":"Merge sort","correct":"TRUE"}"#;
        let option: QuestionOption = serde_json::from_str(json).expect("option should parse");
        assert!(option.correct);

        let json = r#"{"option":"Heap sort","correct":null}"#;
        let option: QuestionOption = serde_json::from_str(json).expect("option should parse");
        assert!(!option.correct);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let question: McqQuestion =
            serde_json::from_str(r#"{"question":"Q"}"#).expect("question should parse");

        assert_eq!(question.question, "Q");
        assert!(question.options.is_empty());
        assert_eq!(question.explanation, "");
    }
}
