pub const MCQ_SYSTEM_PREAMBLE: &str =
    "You are an educational assistant that creates high-quality multiple-choice questions (MCQs).";

pub const REFERENCE_INTRO: &str = "I'm providing content from previous year papers to help you generate more authentic and relevant questions:";

pub const REFERENCE_BLOCK_HEADER: &str = "PREVIOUS YEAR PAPERS CONTENT:";

pub const REFERENCE_BLOCK_DELIMITER: &str = "---";

pub const REFERENCE_USAGE: &str = "Use the content above to generate questions that match the style, difficulty level, and content coverage of actual exams for this course.
Modify the questions rather than copying them verbatim, but keep the essential concepts being tested.";

pub const NO_REFERENCE_NOTE: &str = "Note: No previous year papers are available, so create original questions based on the typical curriculum for this course and these topics.";

pub const QUALITY_RULES: &str = "Create challenging questions that test deep understanding, not just memorization.
Each question must have exactly 4 options with exactly one correct answer.";

pub const OUTPUT_FORMAT: &str = r#"Format your response as a JSON array of questions with the following structure:
[
    {
        "question": "Full text of the question",
        "options": [
            {"option": "Option A text", "correct": true|false},
            {"option": "Option B text", "correct": true|false},
            {"option": "Option C text", "correct": true|false},
            {"option": "Option D text", "correct": true|false}
        ],
        "explanation": "Explanation of the correct answer"
    }
]"#;

pub const OUTPUT_RULES: &str = "Ensure exactly one option has \"correct\": true for each question.
Provide comprehensive explanations for the correct answers.
Respond with pure JSON only. The response must start with '[' and end with ']'. Do not add an introduction such as 'Here are your questions' and do not add any closing remarks or markdown fences.";
