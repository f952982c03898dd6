use crate::constants::mcq_prompt::{
    MCQ_SYSTEM_PREAMBLE, NO_REFERENCE_NOTE, OUTPUT_FORMAT, OUTPUT_RULES, QUALITY_RULES,
    REFERENCE_BLOCK_DELIMITER, REFERENCE_BLOCK_HEADER, REFERENCE_INTRO, REFERENCE_USAGE,
};

/// Renders the generation instruction. Pure and deterministic: identical
/// inputs always produce identical text.
pub fn build_system_prompt(
    course_name: &str,
    course_code: &str,
    topics: &[String],
    question_count: usize,
    reference_context: &str,
) -> String {
    let mut prompt = String::new();

    prompt.push_str(MCQ_SYSTEM_PREAMBLE);
    prompt.push_str("\n\n");

    prompt.push_str(&format!(
        "Generate {} MCQs for the course \"{}\" ({}) on the following topics: {}.\n\n",
        question_count,
        course_name,
        course_code,
        topics.join(", ")
    ));

    if reference_context.trim().is_empty() {
        prompt.push_str(NO_REFERENCE_NOTE);
        prompt.push_str("\n\n");
    } else {
        prompt.push_str(REFERENCE_INTRO);
        prompt.push_str("\n\n");
        prompt.push_str(REFERENCE_BLOCK_HEADER);
        prompt.push('\n');
        prompt.push_str(REFERENCE_BLOCK_DELIMITER);
        prompt.push('\n');
        prompt.push_str(reference_context);
        prompt.push('\n');
        prompt.push_str(REFERENCE_BLOCK_DELIMITER);
        prompt.push_str("\n\n");
        prompt.push_str(REFERENCE_USAGE);
        prompt.push_str("\n\n");
    }

    prompt.push_str(QUALITY_RULES);
    prompt.push_str("\n\n");
    prompt.push_str(OUTPUT_FORMAT);
    prompt.push_str("\n\n");
    prompt.push_str(OUTPUT_RULES);

    prompt
}

/// Short fixed user turn restating the topics.
pub fn build_user_turn(topics: &[String]) -> String {
    format!(
        "Generate MCQs according to the requirements above, focusing on the specified topics: {}",
        topics.join(", ")
    )
}
