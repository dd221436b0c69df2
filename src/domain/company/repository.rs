use crate::domain::company::entity::{Company, CompanyCourseLink, CompanyUserLink};
use crate::domain::company::value_objects::CompanyId;
use crate::domain::course::CourseId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn find_by_id(&self, id: CompanyId) -> DomainResult<Option<Company>>;

    async fn active_course_link(
        &self,
        course_id: CourseId,
    ) -> DomainResult<Option<CompanyCourseLink>>;

    /// Fails with `DomainError::Conflict` if the course already has an active link.
    async fn insert_course_link(&self, link: CompanyCourseLink)
    -> DomainResult<CompanyCourseLink>;

    /// Suspends the active link of `course_id`, returning it, or `None` if
    /// the course is platform-owned.
    async fn suspend_course_link(
        &self,
        course_id: CourseId,
        at: DateTime<Utc>,
    ) -> DomainResult<Option<CompanyCourseLink>>;

    /// Hard-deletes every link (active or suspended) of `course_id`.
    async fn delete_course_links(&self, course_id: CourseId) -> DomainResult<u64>;

    async fn list_active_course_links(
        &self,
        company_id: CompanyId,
    ) -> DomainResult<Vec<CompanyCourseLink>>;

    async fn active_user_link(
        &self,
        company_id: CompanyId,
        user_id: UserId,
    ) -> DomainResult<Option<CompanyUserLink>>;

    /// Inserts the link or replaces the role/active flag of an existing one.
    async fn upsert_user_link(&self, link: CompanyUserLink) -> DomainResult<CompanyUserLink>;

    /// Returns `false` when there was no active link to deactivate.
    async fn deactivate_user_link(
        &self,
        company_id: CompanyId,
        user_id: UserId,
    ) -> DomainResult<bool>;
}
