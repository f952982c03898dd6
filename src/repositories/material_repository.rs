use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::StudyMaterial};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MaterialRepository: Send + Sync {
    /// Materials uploaded for a course, in the store's natural listing order.
    async fn list_by_course(&self, course_id: &str) -> AppResult<Vec<StudyMaterial>>;
}

pub struct MongoMaterialRepository {
    collection: Collection<StudyMaterial>,
}

impl MongoMaterialRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        use mongodb::{options::IndexOptions, IndexModel};

        log::info!("Creating indexes for study materials collection");

        let course_index = IndexModel::builder()
            .keys(doc! { "courseId": 1 })
            .options(
                IndexOptions::builder()
                    .name("course_id".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(course_index).await?;

        log::info!("Successfully created indexes for study materials collection");
        Ok(())
    }
}

#[async_trait]
impl MaterialRepository for MongoMaterialRepository {
    async fn list_by_course(&self, course_id: &str) -> AppResult<Vec<StudyMaterial>> {
        let cursor = self.collection.find(doc! { "courseId": course_id }).await?;
        let materials: Vec<StudyMaterial> = cursor.try_collect().await?;
        Ok(materials)
    }
}
