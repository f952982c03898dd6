use crate::models::domain::{Course, StudyMaterial};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// The course used throughout generation tests
    pub fn test_course() -> Course {
        Course::new("CS201", "CS201", "Data Structures")
    }

    /// A listed material whose storage path equals its filename
    pub fn test_material(file_name: &str, file_type: &str) -> StudyMaterial {
        StudyMaterial::new("CS201", file_name, file_type, file_name)
    }

    /// One well-formed question object, numbered `n`
    pub fn question_json(n: usize) -> String {
        format!(
            r#"{{"question":"Question {n} about Sorting?","options":[{{"option":"Merge sort","correct":true}},{{"option":"Heap sort","correct":false}},{{"option":"Quick sort","correct":false}},{{"option":"Selection sort","correct":false}}],"explanation":"Merge sort is stable."}}"#
        )
    }

    /// A JSON array of `count` well-formed questions
    pub fn questions_json(count: usize) -> String {
        let items: Vec<String> = (1..=count).map(question_json).collect();
        format!("[{}]", items.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::McqQuestion;

    #[test]
    fn test_fixtures_questions_json_is_well_formed() {
        let questions: Vec<McqQuestion> =
            serde_json::from_str(&questions_json(3)).expect("fixture should parse");
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q.is_well_formed()));
        assert_eq!(questions[2].question, "Question 3 about Sorting?");
    }

    #[test]
    fn test_fixtures_test_course() {
        let course = test_course();
        assert_eq!(course.course_code, "CS201");
        assert_eq!(course.course_name, "Data Structures");
    }
}
