use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::{article::NewArticle, content::ContentTitle},
};

pub struct InitArticleCommand {
    pub title: String,
}

impl ArticleCommandService {
    /// Creates an empty draft owned by `actor`.
    pub async fn init_article(
        &self,
        actor: &AuthenticatedUser,
        command: InitArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ContentTitle::new(command.title)?;
        let draft = NewArticle::draft(title, actor.id, self.clock.now());

        let created = self.write_repo.insert(draft).await?;
        tracing::info!(article_id = %created.id, author_id = %actor.id, "article initialised");
        Ok(created.into())
    }
}
