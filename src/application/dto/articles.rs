use crate::application::dto::AccessLevel;
use crate::domain::article::Article;
use crate::domain::content::{ContentStatus, Disclosure};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author_id: i64,
    pub premium: bool,
    pub status: ContentStatus,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_published_at: Option<DateTime<Utc>>,
    pub tags: Vec<i64>,
    pub reaction_count: usize,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub last_saved_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            body: article.body.into_inner(),
            author_id: article.author_id.into(),
            premium: article.premium,
            status: article.publication.status,
            published_at: article.publication.published_at,
            last_published_at: article.publication.last_published_at,
            tags: article.tags.into_iter().map(i64::from).collect(),
            reaction_count: article.reactions.len(),
            view_count: article.view_count,
            created_at: article.created_at,
            last_saved_at: article.last_saved_at,
        }
    }
}

/// Article as a particular viewer may see it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisclosedArticleDto {
    #[serde(flatten)]
    pub article: ArticleDto,
    pub access: AccessLevel,
}

impl DisclosedArticleDto {
    /// `None` when the disclosure denies access.
    pub fn disclose(article: Article, disclosure: Disclosure) -> Option<Self> {
        let mut dto = ArticleDto::from(article);
        let access = match disclosure {
            Disclosure::Full => AccessLevel::Full,
            Disclosure::Teaser { text, .. } => {
                dto.body = text;
                AccessLevel::Teaser
            }
            Disclosure::Denied(_) => return None,
        };
        Some(Self {
            article: dto,
            access,
        })
    }
}
