// src/application/commands/courses/mod.rs
mod chapters;
mod delete;
mod init;
mod lessons;
mod publish;
mod react;
mod save;
mod service;

pub use chapters::AddChapterCommand;
pub use delete::DeleteCourseCommand;
pub use init::InitCourseCommand;
pub use lessons::{DeleteLessonCommand, SaveLessonCommand};
pub use publish::PublishCourseCommand;
pub use react::AddCourseReactionCommand;
pub use save::SaveCourseCommand;
pub use service::CourseCommandService;
