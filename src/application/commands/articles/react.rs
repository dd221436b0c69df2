use super::ArticleCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ReactionDto, reactions::reaction_list},
        error::ApplicationResult,
        services::access::require_authenticated,
    },
    domain::content::{Reaction, ReactionAction},
};

pub struct AddArticleReactionCommand {
    pub id: i64,
    pub action: ReactionAction,
}

impl ArticleCommandService {
    pub async fn add_reaction(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: AddArticleReactionCommand,
    ) -> ApplicationResult<Vec<ReactionDto>> {
        let actor = require_authenticated(actor)?;
        let article = self.load(command.id).await?;
        article.reactions.check(article.status(), actor.id)?;

        let reaction = Reaction {
            author_id: actor.id,
            action: command.action,
            created_at: self.clock.now(),
        };
        let updated = self
            .write_repo
            .append_reaction(article.id, article.version, reaction)
            .await?;
        tracing::info!(article_id = %updated.id, author_id = %actor.id, action = %command.action, "reaction added");
        Ok(reaction_list(&updated.reactions))
    }
}
