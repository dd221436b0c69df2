// src/infrastructure/repositories/postgres_company.rs
use super::map_sqlx;
use crate::domain::company::{
    Company, CompanyCourseLink, CompanyId, CompanyRepository, CompanyUserLink,
};
use crate::domain::course::CourseId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgExecutor, PgPool};

const COURSE_LINK_COLUMNS: &str = "company_id, course_id, active, linked_at, suspended_at";

#[derive(Clone)]
pub struct PostgresCompanyRepository {
    pool: PgPool,
}

impl PostgresCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CompanyRow {
    id: i64,
    name: String,
}

#[derive(Debug, FromRow)]
struct CourseLinkRow {
    company_id: i64,
    course_id: i64,
    active: bool,
    linked_at: DateTime<Utc>,
    suspended_at: Option<DateTime<Utc>>,
}

impl TryFrom<CourseLinkRow> for CompanyCourseLink {
    type Error = DomainError;

    fn try_from(row: CourseLinkRow) -> Result<Self, Self::Error> {
        Ok(CompanyCourseLink {
            company_id: CompanyId::new(row.company_id)?,
            course_id: CourseId::new(row.course_id)?,
            active: row.active,
            linked_at: row.linked_at,
            suspended_at: row.suspended_at,
        })
    }
}

/// Shared with course creation, which writes the course and its link in one
/// transaction.
pub(super) async fn insert_link<'e>(
    exec: impl PgExecutor<'e>,
    link: &CompanyCourseLink,
) -> DomainResult<CompanyCourseLink> {
    // the partial unique index rejects a second active link for the course
    let row = sqlx::query_as::<_, CourseLinkRow>(&format!(
        "INSERT INTO company_course_links (company_id, course_id, active, linked_at, suspended_at)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {COURSE_LINK_COLUMNS}"
    ))
    .bind(i64::from(link.company_id))
    .bind(i64::from(link.course_id))
    .bind(link.active)
    .bind(link.linked_at)
    .bind(link.suspended_at)
    .fetch_one(exec)
    .await
    .map_err(map_sqlx)?;
    CompanyCourseLink::try_from(row)
}

#[derive(Debug, FromRow)]
struct UserLinkRow {
    company_id: i64,
    user_id: i64,
    role: String,
    active: bool,
}

impl TryFrom<UserLinkRow> for CompanyUserLink {
    type Error = DomainError;

    fn try_from(row: UserLinkRow) -> Result<Self, Self::Error> {
        Ok(CompanyUserLink {
            company_id: CompanyId::new(row.company_id)?,
            user_id: UserId::new(row.user_id)?,
            role: row.role.parse()?,
            active: row.active,
        })
    }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
    async fn find_by_id(&self, id: CompanyId) -> DomainResult<Option<Company>> {
        let row = sqlx::query_as::<_, CompanyRow>("SELECT id, name FROM companies WHERE id = $1")
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(|row| {
            Ok(Company {
                id: CompanyId::new(row.id)?,
                name: row.name,
            })
        })
        .transpose()
    }

    async fn active_course_link(
        &self,
        course_id: CourseId,
    ) -> DomainResult<Option<CompanyCourseLink>> {
        let row = sqlx::query_as::<_, CourseLinkRow>(&format!(
            "SELECT {COURSE_LINK_COLUMNS} FROM company_course_links
             WHERE course_id = $1 AND active"
        ))
        .bind(i64::from(course_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(CompanyCourseLink::try_from).transpose()
    }

    async fn insert_course_link(
        &self,
        link: CompanyCourseLink,
    ) -> DomainResult<CompanyCourseLink> {
        insert_link(&self.pool, &link).await
    }

    async fn suspend_course_link(
        &self,
        course_id: CourseId,
        at: DateTime<Utc>,
    ) -> DomainResult<Option<CompanyCourseLink>> {
        let row = sqlx::query_as::<_, CourseLinkRow>(&format!(
            "UPDATE company_course_links SET active = FALSE, suspended_at = $2
             WHERE course_id = $1 AND active
             RETURNING {COURSE_LINK_COLUMNS}"
        ))
        .bind(i64::from(course_id))
        .bind(at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(CompanyCourseLink::try_from).transpose()
    }

    async fn delete_course_links(&self, course_id: CourseId) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM company_course_links WHERE course_id = $1")
            .bind(i64::from(course_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn list_active_course_links(
        &self,
        company_id: CompanyId,
    ) -> DomainResult<Vec<CompanyCourseLink>> {
        let rows = sqlx::query_as::<_, CourseLinkRow>(&format!(
            "SELECT {COURSE_LINK_COLUMNS} FROM company_course_links
             WHERE company_id = $1 AND active
             ORDER BY linked_at, course_id"
        ))
        .bind(i64::from(company_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        rows.into_iter().map(CompanyCourseLink::try_from).collect()
    }

    async fn active_user_link(
        &self,
        company_id: CompanyId,
        user_id: UserId,
    ) -> DomainResult<Option<CompanyUserLink>> {
        let row = sqlx::query_as::<_, UserLinkRow>(
            "SELECT company_id, user_id, role, active FROM company_user_links
             WHERE company_id = $1 AND user_id = $2 AND active",
        )
        .bind(i64::from(company_id))
        .bind(i64::from(user_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.map(CompanyUserLink::try_from).transpose()
    }

    async fn upsert_user_link(&self, link: CompanyUserLink) -> DomainResult<CompanyUserLink> {
        let row = sqlx::query_as::<_, UserLinkRow>(
            "INSERT INTO company_user_links (company_id, user_id, role, active)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (company_id, user_id)
             DO UPDATE SET role = EXCLUDED.role, active = EXCLUDED.active
             RETURNING company_id, user_id, role, active",
        )
        .bind(i64::from(link.company_id))
        .bind(i64::from(link.user_id))
        .bind(link.role.as_str())
        .bind(link.active)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        CompanyUserLink::try_from(row)
    }

    async fn deactivate_user_link(
        &self,
        company_id: CompanyId,
        user_id: UserId,
    ) -> DomainResult<bool> {
        let result = sqlx::query(
            "UPDATE company_user_links SET active = FALSE
             WHERE company_id = $1 AND user_id = $2 AND active",
        )
        .bind(i64::from(company_id))
        .bind(i64::from(user_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }
}
