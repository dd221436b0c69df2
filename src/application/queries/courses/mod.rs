mod get_by_id;
mod lesson;
mod service;

pub use get_by_id::GetCourseByIdQuery;
pub use lesson::GetLessonQuery;
pub use service::CourseQueryService;
