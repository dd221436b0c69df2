use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::content::{ContentBody, ContentStatus, ContentTitle},
};

/// Edit of an existing article. `None` fields are left untouched; a `None`
/// status keeps the current one.
pub struct SaveArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
    pub premium: Option<bool>,
    pub tags: Option<Vec<i64>>,
    pub status: Option<ContentStatus>,
}

impl SaveArticleCommand {
    pub fn builder(id: i64) -> SaveArticleCommandBuilder {
        SaveArticleCommandBuilder {
            command: SaveArticleCommand {
                id,
                title: None,
                body: None,
                premium: None,
                tags: None,
                status: None,
            },
        }
    }
}

pub struct SaveArticleCommandBuilder {
    command: SaveArticleCommand,
}

impl SaveArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.command.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.command.body = Some(body.into());
        self
    }

    pub fn premium(mut self, premium: bool) -> Self {
        self.command.premium = Some(premium);
        self
    }

    pub fn tags(mut self, tags: impl IntoIterator<Item = i64>) -> Self {
        self.command.tags = Some(tags.into_iter().collect());
        self
    }

    pub fn status(mut self, status: ContentStatus) -> Self {
        self.command.status = Some(status);
        self
    }

    pub fn build(self) -> SaveArticleCommand {
        self.command
    }
}

impl ArticleCommandService {
    pub async fn save_article(
        &self,
        actor: &AuthenticatedUser,
        command: SaveArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load(command.id).await?;
        let access = self.access.article_access(Some(actor), &article);

        if !access.can_edit() {
            tracing::debug!(article_id = %article.id, actor_id = %actor.id, "article edit denied");
            return Err(ApplicationError::forbidden(
                "insufficient privileges to edit article",
            ));
        }

        let SaveArticleCommand {
            id: _,
            title,
            body,
            premium,
            tags,
            status,
        } = command;

        let title = title.map(ContentTitle::new).transpose()?;
        let body = body.map(ContentBody::new);
        let tags = match tags {
            Some(raw) => Some(self.tags.resolve(&raw).await?),
            None => None,
        };

        let now = self.clock.now();
        let previous = article.status();
        article.set_content(title, body, now);
        if let Some(premium) = premium {
            article.set_premium(premium, now);
        }
        if let Some(tags) = tags {
            article.set_tags(tags, now);
        }
        let requested = status.unwrap_or(previous);
        let next = article.apply_status(requested, access.is_privileged(), now);

        let updated = self.write_repo.update(&article).await?;
        if next != previous {
            tracing::info!(
                article_id = %updated.id,
                from = %previous,
                to = %next,
                requested = %requested,
                "article status changed"
            );
        }
        Ok(updated.into())
    }
}
