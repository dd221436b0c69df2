// src/application/services/catalog.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::course::{
        Chapter, ChapterId, ChapterRepository, Course, CourseId, CourseReadRepository, Lesson,
        LessonId, LessonRepository,
    },
};

/// Id-based lookups along lesson -> chapter -> course. Entities only hold the
/// id of their parent, so every hop goes through a store.
pub struct CourseCatalog {
    courses: Arc<dyn CourseReadRepository>,
    chapters: Arc<dyn ChapterRepository>,
    lessons: Arc<dyn LessonRepository>,
}

impl CourseCatalog {
    pub fn new(
        courses: Arc<dyn CourseReadRepository>,
        chapters: Arc<dyn ChapterRepository>,
        lessons: Arc<dyn LessonRepository>,
    ) -> Self {
        Self {
            courses,
            chapters,
            lessons,
        }
    }

    pub async fn course(&self, raw_id: i64) -> ApplicationResult<Course> {
        let id = CourseId::new(raw_id)?;
        self.courses
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("course not found"))
    }

    pub async fn chapter(&self, raw_id: i64) -> ApplicationResult<Chapter> {
        let id = ChapterId::new(raw_id)?;
        self.chapters
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("chapter not found"))
    }

    pub async fn chapters_of(&self, course_id: CourseId) -> ApplicationResult<Vec<Chapter>> {
        Ok(self.chapters.list_by_course(course_id).await?)
    }

    /// Chapter together with the course it belongs to.
    pub async fn chapter_with_course(&self, raw_id: i64) -> ApplicationResult<(Chapter, Course)> {
        let chapter = self.chapter(raw_id).await?;
        let course = self.course(chapter.course_id.into()).await?;
        Ok((chapter, course))
    }

    pub async fn lesson(&self, raw_id: i64) -> ApplicationResult<Lesson> {
        let id = LessonId::new(raw_id)?;
        self.lessons
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("lesson not found"))
    }

    /// Lesson together with the course whose status and ownership it inherits.
    pub async fn lesson_with_course(&self, raw_id: i64) -> ApplicationResult<(Lesson, Course)> {
        let lesson = self.lesson(raw_id).await?;
        let (_, course) = self.chapter_with_course(lesson.chapter_id.into()).await?;
        Ok((lesson, course))
    }
}
