use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Course, GenerationRequest, GenerationResult, ReferenceDocument},
    repositories::{CourseRepository, MaterialRepository},
    services::{
        model_service::ModelGateway,
        prompt_builder::{build_system_prompt, build_user_turn},
        question_validator::{validate_questions, OptionPolicy},
        reference_aggregator::ReferenceAggregator,
        response_repairer::repair_response,
        text_extractor::TextExtractor,
    },
    storage::FileStore,
};

const RAW_PREVIEW_CHARS: usize = 500;

/// Runs one generation request end to end: grounding context, prompt,
/// a single model call, repair and validation. No retries.
pub struct McqGenerationService {
    courses: Arc<dyn CourseRepository>,
    materials: Arc<dyn MaterialRepository>,
    model: Arc<dyn ModelGateway>,
    aggregator: ReferenceAggregator,
    option_policy: OptionPolicy,
}

impl McqGenerationService {
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        materials: Arc<dyn MaterialRepository>,
        file_store: Arc<dyn FileStore>,
        model: Arc<dyn ModelGateway>,
        option_policy: OptionPolicy,
    ) -> Self {
        Self {
            courses,
            materials,
            model,
            aggregator: ReferenceAggregator::new(TextExtractor::new(file_store)),
            option_policy,
        }
    }

    pub async fn generate(&self, request: GenerationRequest) -> AppResult<GenerationResult> {
        let request_id = Uuid::new_v4();
        log::info!(
            "Generation {}: {} MCQs for course {} on [{}]",
            request_id,
            request.question_count.get(),
            request.course_id,
            request.topic_list()
        );

        let course = self
            .courses
            .find_by_id(&request.course_id)
            .await
            .map_err(|e| AppError::GenerationFailed(format!("Failed to fetch course: {}", e)))?
            .ok_or_else(|| AppError::CourseNotFound(request.course_id.clone()))?;

        match self.generate_for_course(&course, &request).await {
            Ok(result) => {
                log::info!(
                    "Generation {}: produced {} questions",
                    request_id,
                    result.len()
                );
                Ok(result)
            }
            Err(err) => {
                let failure = into_generation_failure(err);
                log::error!("Generation {} failed: {}", request_id, failure);
                Err(failure)
            }
        }
    }

    async fn generate_for_course(
        &self,
        course: &Course,
        request: &GenerationRequest,
    ) -> AppResult<GenerationResult> {
        let materials = self.materials.list_by_course(&request.course_id).await?;
        let documents: Vec<ReferenceDocument> =
            materials.iter().map(ReferenceDocument::from).collect();

        let context = self
            .aggregator
            .build_context(&request.course_id, &documents)
            .await;

        let count = request.question_count.get();
        let system_prompt = build_system_prompt(
            &course.course_name,
            &course.course_code,
            &request.topics,
            count,
            &context.render(),
        );
        let user_turn = build_user_turn(&request.topics);

        let raw_reply = self.model.complete(&system_prompt, &user_turn).await?;

        let repaired = repair_response(&raw_reply);
        log::debug!("Repaired model reply via {} path", repaired.kind());

        let questions = validate_questions(repaired.as_str(), count, self.option_policy)
            .map_err(|err| match err {
                AppError::GenerationParseError { message, .. } => {
                    AppError::GenerationParseError {
                        message,
                        raw_response: raw_reply.clone(),
                    }
                }
                other => other,
            })?;

        if questions.is_empty() {
            log::warn!(
                "No usable questions in model reply for course {}",
                request.course_id
            );
        }

        Ok(GenerationResult {
            course_id: request.course_id.clone(),
            questions,
            reference_documents: context.document_names(),
            generated_at: Utc::now(),
        })
    }
}

/// Collapses every failure after course resolution into `GenerationFailed`.
fn into_generation_failure(err: AppError) -> AppError {
    match err {
        AppError::GenerationFailed(_) => err,
        AppError::GenerationParseError {
            message,
            raw_response,
        } => {
            log::error!(
                "Unparseable model reply (first {} chars): {}",
                RAW_PREVIEW_CHARS,
                preview(&raw_response, RAW_PREVIEW_CHARS)
            );
            log::debug!("Full model reply: {}", raw_response);
            AppError::GenerationFailed(format!("Failed to parse AI response: {}", message))
        }
        other => AppError::GenerationFailed(other.to_string()),
    }
}

fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
