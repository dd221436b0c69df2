pub mod entity;
pub mod repository;

pub use entity::Enrollment;
pub use repository::EnrollmentRepository;
