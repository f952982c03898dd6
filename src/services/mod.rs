pub mod mcq_generation_service;
pub mod model_service;
pub mod prompt_builder;
pub mod question_validator;
pub mod reference_aggregator;
pub mod response_repairer;
pub mod text_extractor;
