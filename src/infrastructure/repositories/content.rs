// src/infrastructure/repositories/content.rs
//! Side tables shared by articles and courses: tag sets and reaction logs.
use super::map_sqlx;
use crate::domain::content::{Reaction, ReactionLog};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::TagId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgExecutor};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy)]
pub(super) enum ContentTable {
    Articles,
    Courses,
}

impl ContentTable {
    pub(super) fn kind(self) -> &'static str {
        match self {
            ContentTable::Articles => "article",
            ContentTable::Courses => "course",
        }
    }

    fn select_tags(self) -> &'static str {
        match self {
            ContentTable::Articles => {
                "SELECT tag_id FROM article_tags WHERE article_id = $1 ORDER BY tag_id"
            }
            ContentTable::Courses => {
                "SELECT tag_id FROM course_tags WHERE course_id = $1 ORDER BY tag_id"
            }
        }
    }

    fn clear_tags(self) -> &'static str {
        match self {
            ContentTable::Articles => "DELETE FROM article_tags WHERE article_id = $1",
            ContentTable::Courses => "DELETE FROM course_tags WHERE course_id = $1",
        }
    }

    fn insert_tags(self) -> &'static str {
        match self {
            ContentTable::Articles => {
                "INSERT INTO article_tags (article_id, tag_id) SELECT $1, UNNEST($2::BIGINT[])"
            }
            ContentTable::Courses => {
                "INSERT INTO course_tags (course_id, tag_id) SELECT $1, UNNEST($2::BIGINT[])"
            }
        }
    }

    /// Bumps the version only if it still matches; returns `None` otherwise.
    pub(super) fn bump_version(self) -> &'static str {
        match self {
            ContentTable::Articles => {
                "UPDATE articles SET version = version + 1 WHERE id = $1 AND version = $2 RETURNING version"
            }
            ContentTable::Courses => {
                "UPDATE courses SET version = version + 1 WHERE id = $1 AND version = $2 RETURNING version"
            }
        }
    }

    pub(super) fn exists(self) -> &'static str {
        match self {
            ContentTable::Articles => "SELECT EXISTS(SELECT 1 FROM articles WHERE id = $1)",
            ContentTable::Courses => "SELECT EXISTS(SELECT 1 FROM courses WHERE id = $1)",
        }
    }

}

#[derive(Debug, FromRow)]
struct ReactionRow {
    author_id: i64,
    action: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ReactionRow> for Reaction {
    type Error = DomainError;

    fn try_from(row: ReactionRow) -> Result<Self, Self::Error> {
        Ok(Reaction {
            author_id: UserId::new(row.author_id)?,
            action: row.action.parse()?,
            created_at: row.created_at,
        })
    }
}

pub(super) async fn load_tags<'e>(
    exec: impl PgExecutor<'e>,
    table: ContentTable,
    id: i64,
) -> DomainResult<BTreeSet<TagId>> {
    let ids: Vec<i64> = sqlx::query_scalar(table.select_tags())
        .bind(id)
        .fetch_all(exec)
        .await
        .map_err(map_sqlx)?;
    ids.into_iter().map(TagId::new).collect()
}

pub(super) async fn clear_tags<'e>(
    exec: impl PgExecutor<'e>,
    table: ContentTable,
    id: i64,
) -> DomainResult<()> {
    sqlx::query(table.clear_tags())
        .bind(id)
        .execute(exec)
        .await
        .map_err(map_sqlx)?;
    Ok(())
}

pub(super) async fn insert_tags<'e>(
    exec: impl PgExecutor<'e>,
    table: ContentTable,
    id: i64,
    tags: &BTreeSet<TagId>,
) -> DomainResult<()> {
    if tags.is_empty() {
        return Ok(());
    }
    let ids: Vec<i64> = tags.iter().copied().map(i64::from).collect();
    sqlx::query(table.insert_tags())
        .bind(id)
        .bind(ids)
        .execute(exec)
        .await
        .map_err(map_sqlx)?;
    Ok(())
}

pub(super) async fn load_reactions<'e>(
    exec: impl PgExecutor<'e>,
    table: ContentTable,
    id: i64,
) -> DomainResult<ReactionLog> {
    let rows = sqlx::query_as::<_, ReactionRow>(
        "SELECT author_id, action, created_at FROM reactions
         WHERE target_kind = $1 AND target_id = $2
         ORDER BY id",
    )
    .bind(table.kind())
    .bind(id)
    .fetch_all(exec)
    .await
    .map_err(map_sqlx)?;

    let reactions = rows
        .into_iter()
        .map(Reaction::try_from)
        .collect::<DomainResult<Vec<_>>>()?;
    Ok(ReactionLog::new(reactions))
}

pub(super) async fn insert_reaction<'e>(
    exec: impl PgExecutor<'e>,
    table: ContentTable,
    id: i64,
    reaction: &Reaction,
) -> DomainResult<()> {
    sqlx::query(
        "INSERT INTO reactions (target_kind, target_id, author_id, action, created_at)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(table.kind())
    .bind(id)
    .bind(i64::from(reaction.author_id))
    .bind(reaction.action.as_str())
    .bind(reaction.created_at)
    .execute(exec)
    .await
    .map_err(map_sqlx)?;
    Ok(())
}

pub(super) async fn delete_reactions<'e>(
    exec: impl PgExecutor<'e>,
    table: ContentTable,
    id: i64,
) -> DomainResult<()> {
    sqlx::query("DELETE FROM reactions WHERE target_kind = $1 AND target_id = $2")
        .bind(table.kind())
        .bind(id)
        .execute(exec)
        .await
        .map_err(map_sqlx)?;
    Ok(())
}

/// Explains why a versioned write matched no row.
pub(super) async fn stale_or_missing<'e>(
    exec: impl PgExecutor<'e>,
    table: ContentTable,
    id: i64,
) -> DomainError {
    match sqlx::query_scalar::<_, bool>(table.exists())
        .bind(id)
        .fetch_one(exec)
        .await
    {
        Ok(true) => DomainError::Conflict(format!(
            "{} was modified concurrently, please retry",
            table.kind()
        )),
        Ok(false) => DomainError::NotFound(format!("{} not found", table.kind())),
        Err(err) => map_sqlx(err),
    }
}
