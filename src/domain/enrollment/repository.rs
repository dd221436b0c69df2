use crate::domain::course::{CourseId, LessonId};
use crate::domain::enrollment::entity::Enrollment;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Enrollments are created by the billing side; this crate reads them and
/// records lesson progress.
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn active_enrollment(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> DomainResult<Option<Enrollment>>;

    async fn count_active(&self, course_id: CourseId) -> DomainResult<u64>;

    async fn mark_lesson_completed(
        &self,
        user_id: UserId,
        course_id: CourseId,
        lesson_id: LessonId,
    ) -> DomainResult<Enrollment>;
}
