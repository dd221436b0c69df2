use crate::domain::company::CompanyId;
use crate::domain::content::Reaction;
use crate::domain::course::entity::{
    Chapter, Course, Lesson, NewChapter, NewCourse, NewLesson,
};
use crate::domain::course::value_objects::{ChapterId, CourseId, LessonId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Same versioning contract as `ArticleWriteRepository`.
#[async_trait]
pub trait CourseWriteRepository: Send + Sync {
    async fn insert(&self, course: NewCourse) -> DomainResult<Course>;
    /// Inserts the course together with an active link to `company_id`.
    /// Either both rows exist afterwards or neither does.
    async fn insert_linked(
        &self,
        course: NewCourse,
        company_id: CompanyId,
    ) -> DomainResult<Course>;
    async fn update(&self, course: &Course) -> DomainResult<Course>;
    /// Removes the course together with its chapters and lessons.
    async fn delete(&self, id: CourseId) -> DomainResult<()>;
    async fn append_reaction(
        &self,
        id: CourseId,
        expected_version: i64,
        reaction: Reaction,
    ) -> DomainResult<Course>;
}

#[async_trait]
pub trait CourseReadRepository: Send + Sync {
    async fn find_by_id(&self, id: CourseId) -> DomainResult<Option<Course>>;
}

#[async_trait]
pub trait ChapterRepository: Send + Sync {
    async fn find_by_id(&self, id: ChapterId) -> DomainResult<Option<Chapter>>;
    async fn insert(&self, chapter: NewChapter) -> DomainResult<Chapter>;
    async fn list_by_course(&self, course_id: CourseId) -> DomainResult<Vec<Chapter>>;
}

#[async_trait]
pub trait LessonRepository: Send + Sync {
    async fn find_by_id(&self, id: LessonId) -> DomainResult<Option<Lesson>>;
    async fn insert(&self, lesson: NewLesson) -> DomainResult<Lesson>;
    async fn update(&self, lesson: &Lesson) -> DomainResult<Lesson>;
    async fn delete(&self, id: LessonId) -> DomainResult<()>;
}
