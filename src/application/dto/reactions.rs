use crate::domain::content::{Reaction, ReactionAction, ReactionLog};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionDto {
    pub author_id: i64,
    pub action: ReactionAction,
    pub created_at: DateTime<Utc>,
}

impl From<&Reaction> for ReactionDto {
    fn from(reaction: &Reaction) -> Self {
        Self {
            author_id: reaction.author_id.into(),
            action: reaction.action,
            created_at: reaction.created_at,
        }
    }
}

pub fn reaction_list(log: &ReactionLog) -> Vec<ReactionDto> {
    log.as_slice().iter().map(ReactionDto::from).collect()
}
