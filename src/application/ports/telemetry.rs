// src/application/ports/telemetry.rs
use crate::application::ApplicationResult;
use crate::domain::{article::ArticleId, course::{CourseId, LessonId}, user::UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTarget {
    Article(ArticleId),
    Course(CourseId),
    Lesson(LessonId),
}

impl ViewTarget {
    pub fn kind(&self) -> &'static str {
        match self {
            ViewTarget::Article(_) => "article",
            ViewTarget::Course(_) => "course",
            ViewTarget::Lesson(_) => "lesson",
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            ViewTarget::Article(id) => id.0,
            ViewTarget::Course(id) => id.0,
            ViewTarget::Lesson(id) => id.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEvent {
    pub id: Uuid,
    pub target: ViewTarget,
    pub viewer: Option<UserId>,
    /// Teaser served to someone without an account.
    pub not_enrolled_access: bool,
    pub at: DateTime<Utc>,
}

impl ViewEvent {
    pub fn new(target: ViewTarget, viewer: Option<UserId>, at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            target,
            viewer,
            not_enrolled_access: false,
            at,
        }
    }

    pub fn with_not_enrolled_access(mut self, flag: bool) -> Self {
        self.not_enrolled_access = flag;
        self
    }
}

/// Bumps view counters and stores view events. Best effort: callers log
/// failures and carry on with the read.
#[async_trait]
pub trait ViewTracker: Send + Sync {
    async fn record(&self, event: ViewEvent) -> ApplicationResult<()>;
}
