use super::CourseCommandService;
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationResult},
    domain::company::Ownership,
};

pub struct DeleteCourseCommand {
    pub id: i64,
}

impl CourseCommandService {
    pub async fn delete_course(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCourseCommand,
    ) -> ApplicationResult<()> {
        let course = self.catalog.course(command.id).await?;
        let access = self.access.course_access(Some(actor), &course).await?;

        let enrollments = match access.ownership() {
            Ownership::Platform if course.status().is_published() => {
                self.enrollments.count_active(course.id).await?
            }
            _ => 0,
        };
        if let Err(denied) = access.can_delete(course.status(), enrollments) {
            tracing::debug!(course_id = %course.id, actor_id = %actor.id, %denied, "course delete denied");
            return Err(denied.into());
        }

        self.write_repo.delete(course.id).await?;
        tracing::info!(course_id = %course.id, actor_id = %actor.id, "course deleted");
        Ok(())
    }
}
