use super::ArticleQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, DisclosedArticleDto},
        error::{ApplicationError, ApplicationResult},
        ports::telemetry::{ViewEvent, ViewTarget},
        services::views::record_best_effort,
    },
    domain::{
        article::ArticleId,
        content::{DisclosureRequest, TeaserRatio},
    },
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Article as `viewer` may see it. Unpublished articles are reported as
    /// missing to everyone but their editors.
    pub async fn view_article(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<DisclosedArticleDto> {
        let id = ArticleId::new(query.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let access = self.access.article_access(viewer, &article);
        let request = DisclosureRequest {
            published: article.status().is_published(),
            anonymous: viewer.is_none(),
            full_reader: access.can_edit(),
            gated: article.premium,
            entitled: access.matrix().has_pro_plan(),
            deny_anonymous: false,
            ratio: TeaserRatio::Half,
        };
        let disclosure = request.evaluate(article.body.as_str());

        let track = request.published && !access.is_author();
        let dto = DisclosedArticleDto::disclose(article, disclosure)
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if track {
            let event = ViewEvent::new(
                ViewTarget::Article(id),
                viewer.map(|v| v.id),
                self.clock.now(),
            );
            record_best_effort(self.views.as_ref(), event).await;
        }
        Ok(dto)
    }
}
