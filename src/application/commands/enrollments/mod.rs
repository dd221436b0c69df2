// src/application/commands/enrollments/mod.rs
mod complete;
mod service;

pub use complete::CompleteLessonCommand;
pub use service::EnrollmentCommandService;
