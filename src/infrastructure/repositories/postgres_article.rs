// src/infrastructure/repositories/postgres_article.rs
use super::content::{self, ContentTable};
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleWriteRepository, NewArticle,
};
use crate::domain::content::{ContentBody, ContentTitle, Publication, Reaction, ReactionLog};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::TagId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::collections::BTreeSet;

const ARTICLE_COLUMNS: &str = "id, title, body, author_id, premium, status, published_at, \
     last_published_at, view_count, created_at, last_saved_at, version";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    body: String,
    author_id: i64,
    premium: bool,
    status: String,
    published_at: Option<DateTime<Utc>>,
    last_published_at: Option<DateTime<Utc>>,
    view_count: i64,
    created_at: DateTime<Utc>,
    last_saved_at: DateTime<Utc>,
    version: i64,
}

impl ArticleRow {
    fn into_article(self, tags: BTreeSet<TagId>, reactions: ReactionLog) -> DomainResult<Article> {
        Ok(Article {
            id: ArticleId::new(self.id)?,
            title: ContentTitle::new(self.title)?,
            body: ContentBody::new(self.body),
            author_id: UserId::new(self.author_id)?,
            premium: self.premium,
            publication: Publication {
                status: self.status.parse()?,
                published_at: self.published_at,
                last_published_at: self.last_published_at,
            },
            tags,
            reactions,
            view_count: self.view_count,
            created_at: self.created_at,
            last_saved_at: self.last_saved_at,
            version: self.version,
        })
    }
}

async fn load(pool: &PgPool, id: i64) -> DomainResult<Option<Article>> {
    let row = sqlx::query_as::<_, ArticleRow>(&format!(
        "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(map_sqlx)?;

    let Some(row) = row else {
        return Ok(None);
    };
    let tags = content::load_tags(pool, ContentTable::Articles, id).await?;
    let reactions = content::load_reactions(pool, ContentTable::Articles, id).await?;
    row.into_article(tags, reactions).map(Some)
}

async fn reload(pool: &PgPool, id: i64) -> DomainResult<Article> {
    load(pool, id)
        .await?
        .ok_or_else(|| DomainError::NotFound("article not found".into()))
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            body,
            author_id,
            premium,
            created_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, body, author_id, premium, status, created_at, last_saved_at)
             VALUES ($1, $2, $3, $4, 'draft', $5, $5)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(i64::from(author_id))
        .bind(premium)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.into_article(BTreeSet::new(), ReactionLog::default())
    }

    async fn update(&self, article: &Article) -> DomainResult<Article> {
        let id = i64::from(article.id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let updated = sqlx::query_scalar::<_, i64>(
            "UPDATE articles SET
                title = $3, body = $4, premium = $5, status = $6,
                published_at = $7, last_published_at = $8, last_saved_at = $9,
                version = version + 1
             WHERE id = $1 AND version = $2
             RETURNING version",
        )
        .bind(id)
        .bind(article.version)
        .bind(article.title.as_str())
        .bind(article.body.as_str())
        .bind(article.premium)
        .bind(article.publication.status.as_str())
        .bind(article.publication.published_at)
        .bind(article.publication.last_published_at)
        .bind(article.last_saved_at)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        if updated.is_none() {
            return Err(content::stale_or_missing(&mut *tx, ContentTable::Articles, id).await);
        }

        content::clear_tags(&mut *tx, ContentTable::Articles, id).await?;
        content::insert_tags(&mut *tx, ContentTable::Articles, id, &article.tags).await?;
        tx.commit().await.map_err(map_sqlx)?;

        reload(&self.pool, id).await
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let id = i64::from(id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        content::delete_reactions(&mut *tx, ContentTable::Articles, id).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }

    async fn append_reaction(
        &self,
        id: ArticleId,
        expected_version: i64,
        reaction: Reaction,
    ) -> DomainResult<Article> {
        let id = i64::from(id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let bumped = sqlx::query_scalar::<_, i64>(ContentTable::Articles.bump_version())
            .bind(id)
            .bind(expected_version)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if bumped.is_none() {
            return Err(content::stale_or_missing(&mut *tx, ContentTable::Articles, id).await);
        }

        content::insert_reaction(&mut *tx, ContentTable::Articles, id, &reaction).await?;
        tx.commit().await.map_err(map_sqlx)?;

        reload(&self.pool, id).await
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        load(&self.pool, i64::from(id)).await
    }
}
