// src/infrastructure/repositories/postgres_enrollment.rs
use super::map_sqlx;
use crate::domain::course::{CourseId, LessonId};
use crate::domain::enrollment::{Enrollment, EnrollmentRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresEnrollmentRepository {
    pool: PgPool,
}

impl PostgresEnrollmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentRepository for PostgresEnrollmentRepository {
    async fn active_enrollment(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> DomainResult<Option<Enrollment>> {
        let active = sqlx::query_scalar::<_, bool>(
            "SELECT active FROM enrollments WHERE user_id = $1 AND course_id = $2 AND active",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(course_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if active.is_none() {
            return Ok(None);
        }

        let completed: Vec<i64> = sqlx::query_scalar(
            "SELECT lesson_id FROM enrollment_completed_lessons
             WHERE user_id = $1 AND course_id = $2
             ORDER BY lesson_id",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(course_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut enrollment = Enrollment::new(user_id, course_id);
        for lesson_id in completed {
            enrollment.complete(LessonId::new(lesson_id)?);
        }
        Ok(Some(enrollment))
    }

    async fn count_active(&self, course_id: CourseId) -> DomainResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM enrollments WHERE course_id = $1 AND active",
        )
        .bind(i64::from(course_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        u64::try_from(count)
            .map_err(|_| DomainError::Persistence("negative enrollment count".into()))
    }

    async fn mark_lesson_completed(
        &self,
        user_id: UserId,
        course_id: CourseId,
        lesson_id: LessonId,
    ) -> DomainResult<Enrollment> {
        sqlx::query(
            "INSERT INTO enrollment_completed_lessons (user_id, course_id, lesson_id)
             VALUES ($1, $2, $3)
             ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(course_id))
        .bind(i64::from(lesson_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.active_enrollment(user_id, course_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("enrollment not found".into()))
    }
}
