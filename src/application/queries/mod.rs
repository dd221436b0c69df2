pub mod articles;
pub mod companies;
pub mod courses;
