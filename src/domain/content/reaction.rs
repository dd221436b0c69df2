// src/domain/content/reaction.rs
use crate::domain::content::status::ContentStatus;
use crate::domain::errors::DomainError;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Reactions a single author may leave on one item. The next attempt is refused.
pub const MAX_REACTIONS_PER_AUTHOR: usize = 49;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionAction {
    Love,
    Fire,
    Like,
    Clap,
}

impl ReactionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionAction::Love => "love",
            ReactionAction::Fire => "fire",
            ReactionAction::Like => "like",
            ReactionAction::Clap => "clap",
        }
    }
}

impl fmt::Display for ReactionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "love" => Ok(ReactionAction::Love),
            "fire" => Ok(ReactionAction::Fire),
            "like" => Ok(ReactionAction::Like),
            "clap" => Ok(ReactionAction::Clap),
            other => Err(DomainError::Validation(format!(
                "unknown reaction '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub author_id: UserId,
    pub action: ReactionAction,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReactionRejected {
    #[error("reactions are only accepted on published content")]
    NotPublished,
    #[error("more than 50 reactions")]
    LimitReached,
}

/// Reactions attached to one item, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactionLog(Vec<Reaction>);

impl ReactionLog {
    pub fn new(reactions: Vec<Reaction>) -> Self {
        Self(reactions)
    }

    pub fn as_slice(&self) -> &[Reaction] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn count_by(&self, author_id: UserId) -> usize {
        self.0.iter().filter(|r| r.author_id == author_id).count()
    }

    /// Checks the item status and the per-author bound without mutating.
    pub fn check(&self, status: ContentStatus, author_id: UserId) -> Result<(), ReactionRejected> {
        if !status.is_published() {
            return Err(ReactionRejected::NotPublished);
        }
        if self.count_by(author_id) >= MAX_REACTIONS_PER_AUTHOR {
            return Err(ReactionRejected::LimitReached);
        }
        Ok(())
    }

    pub fn try_push(
        &mut self,
        status: ContentStatus,
        reaction: Reaction,
    ) -> Result<(), ReactionRejected> {
        self.check(status, reaction.author_id)?;
        self.0.push(reaction);
        Ok(())
    }

    pub fn into_inner(self) -> Vec<Reaction> {
        self.0
    }
}
