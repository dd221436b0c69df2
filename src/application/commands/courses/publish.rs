use super::{CourseCommandService, SaveCourseCommand};
use crate::{
    application::{
        dto::{AuthenticatedUser, CourseDto},
        error::ApplicationResult,
    },
    domain::content::ContentStatus,
};

pub struct PublishCourseCommand {
    pub id: i64,
}

impl CourseCommandService {
    pub async fn publish_course(
        &self,
        actor: &AuthenticatedUser,
        command: PublishCourseCommand,
    ) -> ApplicationResult<CourseDto> {
        let save = SaveCourseCommand {
            status: Some(ContentStatus::Published),
            ..SaveCourseCommand::new(command.id)
        };
        self.save_course(actor, save).await
    }
}
