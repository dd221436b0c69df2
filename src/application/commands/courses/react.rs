use super::CourseCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ReactionDto, reactions::reaction_list},
        error::ApplicationResult,
        services::access::require_authenticated,
    },
    domain::content::{Reaction, ReactionAction},
};

pub struct AddCourseReactionCommand {
    pub id: i64,
    pub action: ReactionAction,
}

impl CourseCommandService {
    pub async fn add_reaction(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: AddCourseReactionCommand,
    ) -> ApplicationResult<Vec<ReactionDto>> {
        let actor = require_authenticated(actor)?;
        let course = self.catalog.course(command.id).await?;
        course.reactions.check(course.status(), actor.id)?;

        let reaction = Reaction {
            author_id: actor.id,
            action: command.action,
            created_at: self.clock.now(),
        };
        let updated = self
            .write_repo
            .append_reaction(course.id, course.version, reaction)
            .await?;
        tracing::info!(course_id = %updated.id, author_id = %actor.id, action = %command.action, "reaction added");
        Ok(reaction_list(&updated.reactions))
    }
}
