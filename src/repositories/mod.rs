pub mod course_repository;
pub mod material_repository;

pub use course_repository::{CourseRepository, MongoCourseRepository};
pub use material_repository::{MaterialRepository, MongoMaterialRepository};

#[cfg(test)]
pub use course_repository::MockCourseRepository;
#[cfg(test)]
pub use material_repository::MockMaterialRepository;
