// src/domain/course/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Chapter, Course, Lesson, NewChapter, NewCourse, NewLesson};
pub use repository::{
    ChapterRepository, CourseReadRepository, CourseWriteRepository, LessonRepository,
};
pub use value_objects::{ChapterId, CourseId, LessonId, LessonType};
