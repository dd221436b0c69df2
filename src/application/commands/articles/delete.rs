use super::ArticleCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let article = self.load(command.id).await?;
        let access = self.access.article_access(Some(actor), &article);
        access.can_delete(article.status(), 0)?;

        self.write_repo.delete(article.id).await?;
        tracing::info!(article_id = %article.id, actor_id = %actor.id, "article deleted");
        Ok(())
    }
}
