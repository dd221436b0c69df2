use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::content::Reaction;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Writes are versioned: `update` and `append_reaction` only succeed while the
/// stored version still equals the one the caller read, and bump it. A stale
/// version yields `DomainError::Conflict`.
#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, article: &Article) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    async fn append_reaction(
        &self,
        id: ArticleId,
        expected_version: i64,
        reaction: Reaction,
    ) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
}
