use super::EnrollmentCommandService;
use crate::application::{
    dto::{AuthenticatedUser, EnrollmentDto},
    error::{ApplicationError, ApplicationResult},
    services::access::require_authenticated,
};

pub struct CompleteLessonCommand {
    pub lesson_id: i64,
}

impl EnrollmentCommandService {
    /// Marks a lesson as completed in the viewer's enrollment. Repeating the
    /// call is harmless.
    pub async fn complete_lesson(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: CompleteLessonCommand,
    ) -> ApplicationResult<EnrollmentDto> {
        let actor = require_authenticated(actor)?;
        let (lesson, course) = self.catalog.lesson_with_course(command.lesson_id).await?;

        let enrollment = self
            .enrollments
            .active_enrollment(actor.id, course.id)
            .await?
            .ok_or_else(|| ApplicationError::forbidden("no active enrollment for this course"))?;

        if enrollment.completed_lessons.contains(&lesson.id) {
            return Ok(enrollment.into());
        }

        let updated = self
            .enrollments
            .mark_lesson_completed(actor.id, course.id, lesson.id)
            .await?;
        tracing::info!(user_id = %actor.id, course_id = %course.id, lesson_id = %lesson.id, "lesson completed");
        Ok(updated.into())
    }
}
