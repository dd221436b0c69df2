// src/infrastructure/telemetry.rs
use crate::application::ApplicationResult;
use crate::application::ports::telemetry::{ViewEvent, ViewTarget, ViewTracker};
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use sqlx::PgPool;

/// Stores view events and bumps the matching counter in one transaction.
#[derive(Clone)]
pub struct PostgresViewTracker {
    pool: PgPool,
}

impl PostgresViewTracker {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ViewTracker for PostgresViewTracker {
    async fn record(&self, event: ViewEvent) -> ApplicationResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query(
            "INSERT INTO view_events (id, target_kind, target_id, viewer_id, not_enrolled_access, viewed_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(event.id)
        .bind(event.target.kind())
        .bind(event.target.id())
        .bind(event.viewer.map(i64::from))
        .bind(event.not_enrolled_access)
        .bind(event.at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let counter = match event.target {
            ViewTarget::Article(_) => {
                Some("UPDATE articles SET view_count = view_count + 1 WHERE id = $1")
            }
            ViewTarget::Course(_) => {
                Some("UPDATE courses SET view_count = view_count + 1 WHERE id = $1")
            }
            ViewTarget::Lesson(_) => None,
        };
        if let Some(sql) = counter {
            sqlx::query(sql)
                .bind(event.target.id())
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }
}

/// Used when view tracking is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledViewTracker;

#[async_trait]
impl ViewTracker for DisabledViewTracker {
    async fn record(&self, event: ViewEvent) -> ApplicationResult<()> {
        tracing::trace!(
            target_kind = event.target.kind(),
            target_id = event.target.id(),
            "view tracking disabled"
        );
        Ok(())
    }
}
