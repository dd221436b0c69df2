pub mod articles;
pub mod companies;
pub mod courses;
pub mod enrollments;
