use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection,
};

use crate::{db::Database, errors::AppResult, models::domain::Course};

/// Read-only course directory used to resolve generation metadata.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>>;
}

pub struct MongoCourseRepository {
    collection: Collection<Course>,
}

impl MongoCourseRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }
}

/// Matches an ObjectId when the id parses as one, otherwise a plain string `_id`.
pub(crate) fn id_filter(id: &str) -> Document {
    match ObjectId::parse_str(id) {
        Ok(oid) => doc! { "_id": oid },
        Err(_) => doc! { "_id": id },
    }
}

#[async_trait]
impl CourseRepository for MongoCourseRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        let course = self.collection.find_one(id_filter(id)).await?;
        Ok(course)
    }
}
