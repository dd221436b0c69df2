// src/domain/article/entity.rs
use crate::domain::article::value_objects::ArticleId;
use crate::domain::content::{ContentBody, ContentStatus, ContentTitle, Publication, ReactionLog};
use crate::domain::tag::TagId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ContentTitle,
    pub body: ContentBody,
    pub author_id: UserId,
    pub premium: bool,
    pub publication: Publication,
    pub tags: BTreeSet<TagId>,
    pub reactions: ReactionLog,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub last_saved_at: DateTime<Utc>,
    pub version: i64,
}

impl Article {
    pub fn status(&self) -> ContentStatus {
        self.publication.status
    }

    pub fn set_content(
        &mut self,
        title: Option<ContentTitle>,
        body: Option<ContentBody>,
        now: DateTime<Utc>,
    ) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(body) = body {
            self.body = body;
        }
        self.last_saved_at = now;
    }

    pub fn set_premium(&mut self, premium: bool, now: DateTime<Utc>) {
        self.premium = premium;
        self.last_saved_at = now;
    }

    pub fn set_tags(&mut self, tags: BTreeSet<TagId>, now: DateTime<Utc>) {
        self.tags = tags;
        self.last_saved_at = now;
    }

    pub fn apply_status(
        &mut self,
        requested: ContentStatus,
        privileged: bool,
        now: DateTime<Utc>,
    ) -> ContentStatus {
        self.last_saved_at = now;
        self.publication.apply(requested, privileged, now)
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ContentTitle,
    pub body: ContentBody,
    pub author_id: UserId,
    pub premium: bool,
    pub created_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn draft(title: ContentTitle, author_id: UserId, created_at: DateTime<Utc>) -> Self {
        Self {
            title,
            body: ContentBody::empty(),
            author_id,
            premium: false,
            created_at,
        }
    }

    /// Materialises the draft once the store has assigned an id.
    pub fn into_article(self, id: ArticleId) -> Article {
        Article {
            id,
            title: self.title,
            body: self.body,
            author_id: self.author_id,
            premium: self.premium,
            publication: Publication::draft(),
            tags: BTreeSet::new(),
            reactions: ReactionLog::default(),
            view_count: 0,
            created_at: self.created_at,
            last_saved_at: self.created_at,
            version: 1,
        }
    }
}
