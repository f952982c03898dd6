use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoCourseRepository, MongoMaterialRepository},
    services::{mcq_generation_service::McqGenerationService, model_service::OpenAiModelGateway},
    storage::{HttpFileStore, LocalFileStore, RoutingFileStore},
};

const REMOTE_FILE_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<McqGenerationService>,
}

impl AppState {
    pub async fn new(config: &Config) -> AppResult<Self> {
        let db = Database::connect(config).await?;

        let course_repository = Arc::new(MongoCourseRepository::new(&db, &config.courses_collection));
        let material_repository =
            Arc::new(MongoMaterialRepository::new(&db, &config.materials_collection));
        material_repository.ensure_indexes().await?;

        let file_store = Arc::new(RoutingFileStore::new(
            Arc::new(LocalFileStore::new(config.upload_dir.clone())),
            Arc::new(HttpFileStore::new(Duration::from_secs(REMOTE_FILE_TIMEOUT_SECS))?),
        ));
        let model_gateway = Arc::new(OpenAiModelGateway::new(config));

        let generation_service = McqGenerationService::new(
            course_repository,
            material_repository,
            file_store,
            model_gateway,
            config.option_policy,
        );

        Ok(Self::with_service(generation_service))
    }

    pub fn with_service(generation_service: McqGenerationService) -> Self {
        Self {
            generation_service: Arc::new(generation_service),
        }
    }
}
