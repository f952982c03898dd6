#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use campus_mcq_server::{
    errors::AppResult,
    models::domain::{Course, StudyMaterial},
    repositories::{CourseRepository, MaterialRepository},
    services::{
        mcq_generation_service::McqGenerationService, model_service::ModelGateway,
        question_validator::OptionPolicy,
    },
    storage::LocalFileStore,
};

pub struct InMemoryCourseRepository {
    courses: Arc<RwLock<HashMap<String, Course>>>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self {
            courses: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn insert(&self, course: Course) {
        self.courses.write().await.insert(course.id.clone(), course);
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        Ok(self.courses.read().await.get(id).cloned())
    }
}

pub struct InMemoryMaterialRepository {
    materials: Arc<RwLock<Vec<StudyMaterial>>>,
}

impl InMemoryMaterialRepository {
    pub fn new() -> Self {
        Self {
            materials: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn insert(&self, material: StudyMaterial) {
        self.materials.write().await.push(material);
    }
}

#[async_trait]
impl MaterialRepository for InMemoryMaterialRepository {
    async fn list_by_course(&self, course_id: &str) -> AppResult<Vec<StudyMaterial>> {
        let materials = self.materials.read().await;
        Ok(materials
            .iter()
            .filter(|m| m.course_id == course_id)
            .cloned()
            .collect())
    }
}

/// Returns a canned reply and records every prompt it was sent.
pub struct ScriptedModel {
    reply: String,
    prompts: Arc<Mutex<Vec<(String, String)>>>,
}

impl ScriptedModel {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn prompts(&self) -> Arc<Mutex<Vec<(String, String)>>> {
        Arc::clone(&self.prompts)
    }
}

#[async_trait]
impl ModelGateway for ScriptedModel {
    async fn complete(&self, system_instruction: &str, user_turn: &str) -> AppResult<String> {
        self.prompts
            .lock()
            .await
            .push((system_instruction.to_string(), user_turn.to_string()));
        Ok(self.reply.clone())
    }
}

pub fn data_structures_course() -> Course {
    let mut course = Course::new("CS201", "CS201", "Data Structures");
    course.semester = 3;
    course
}

pub fn question_json(n: usize) -> String {
    format!(
        r#"{{"question":"Question {n} about Sorting?","options":[{{"option":"Merge sort","correct":true}},{{"option":"Heap sort","correct":false}},{{"option":"Quick sort","correct":false}},{{"option":"Selection sort","correct":false}}],"explanation":"Merge sort is stable."}}"#
    )
}

pub fn questions_json(count: usize) -> String {
    let items: Vec<String> = (1..=count).map(question_json).collect();
    format!("[{}]", items.join(","))
}

/// Wires a service over in-memory collaborators and files under `upload_dir`.
pub struct Harness {
    pub courses: Arc<InMemoryCourseRepository>,
    pub materials: Arc<InMemoryMaterialRepository>,
    pub upload_dir: tempfile::TempDir,
}

impl Harness {
    pub async fn new() -> Self {
        let courses = Arc::new(InMemoryCourseRepository::new());
        courses.insert(data_structures_course()).await;

        Self {
            courses,
            materials: Arc::new(InMemoryMaterialRepository::new()),
            upload_dir: tempfile::tempdir().expect("temp upload dir"),
        }
    }

    /// Writes `contents` under the upload dir and lists it for CS201.
    pub async fn upload(&self, file_name: &str, file_type: &str, contents: &[u8]) {
        std::fs::write(self.upload_dir.path().join(file_name), contents).expect("write upload");
        self.materials
            .insert(StudyMaterial::new("CS201", file_name, file_type, file_name))
            .await;
    }

    pub fn service(&self, model: ScriptedModel) -> McqGenerationService {
        McqGenerationService::new(
            self.courses.clone(),
            self.materials.clone(),
            Arc::new(LocalFileStore::new(self.upload_dir.path())),
            Arc::new(model),
            OptionPolicy::Strict,
        )
    }
}
