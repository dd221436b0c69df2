// src/domain/content/status.rs
use crate::domain::errors::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Lifecycle position of an article or course.
///
/// Variants are declared in lifecycle order so `status >= ContentStatus::Published`
/// reads as "published or beyond".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    #[default]
    Draft,
    InReview,
    Published,
}

impl ContentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::InReview => "in_review",
            ContentStatus::Published => "published",
        }
    }

    pub fn is_published(self) -> bool {
        self >= ContentStatus::Published
    }

    fn is_publish_request(self) -> bool {
        matches!(self, ContentStatus::InReview | ContentStatus::Published)
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ContentStatus::Draft),
            "in_review" => Ok(ContentStatus::InReview),
            "published" => Ok(ContentStatus::Published),
            other => Err(DomainError::Validation(format!("unknown status '{other}'"))),
        }
    }
}

/// Status that results from `requested` being applied to `existing`.
///
/// `privileged` means platform admin or, for company-owned courses, admin of
/// the owning company. Whether the actor may edit at all is decided by the
/// caller before this runs.
pub fn transition(
    existing: ContentStatus,
    requested: ContentStatus,
    privileged: bool,
) -> ContentStatus {
    if existing.is_published() {
        return existing;
    }

    if requested.is_publish_request() {
        if privileged {
            requested
        } else {
            ContentStatus::InReview
        }
    } else {
        requested
    }
}

/// Status plus the two publication timestamps that travel with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Publication {
    pub status: ContentStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub last_published_at: Option<DateTime<Utc>>,
}

impl Publication {
    pub fn draft() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ContentStatus {
        self.status
    }

    pub fn is_published(&self) -> bool {
        self.status.is_published()
    }

    /// Runs the transition and stamps the timestamps. `published_at` is
    /// written once; `last_published_at` moves on every save that ends in
    /// `Published`.
    pub fn apply(
        &mut self,
        requested: ContentStatus,
        privileged: bool,
        now: DateTime<Utc>,
    ) -> ContentStatus {
        let next = transition(self.status, requested, privileged);
        if next.is_published() {
            if self.published_at.is_none() {
                self.published_at = Some(now);
            }
            self.last_published_at = Some(now);
        }
        self.status = next;
        next
    }
}
