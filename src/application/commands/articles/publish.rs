use super::{ArticleCommandService, SaveArticleCommand};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::content::ContentStatus,
};

pub struct PublishArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Requests publication. Actors without publish privilege land the
    /// article in review instead.
    pub async fn publish_article(
        &self,
        actor: &AuthenticatedUser,
        command: PublishArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let save = SaveArticleCommand::builder(command.id)
            .status(ContentStatus::Published)
            .build();
        self.save_article(actor, save).await
    }
}
