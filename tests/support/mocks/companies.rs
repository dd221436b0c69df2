use async_trait::async_trait;
use chrono::{DateTime, Utc};
use curricula_core::domain::company::{
    Company, CompanyCourseLink, CompanyId, CompanyRepository, CompanyUserLink,
};
use curricula_core::domain::course::CourseId;
use curricula_core::domain::errors::DomainResult;
use curricula_core::domain::user::UserId;
use curricula_core::infrastructure::repositories::InMemoryStore;

/// Reports `ghost` as an existing company although the store never had it,
/// as if it was deleted right after the lookup. Everything else goes to the
/// wrapped store.
pub struct VanishingCompanyRepository {
    inner: InMemoryStore,
    ghost: CompanyId,
}

impl VanishingCompanyRepository {
    pub fn new(inner: InMemoryStore, ghost: CompanyId) -> Self {
        Self { inner, ghost }
    }
}

#[async_trait]
impl CompanyRepository for VanishingCompanyRepository {
    async fn find_by_id(&self, id: CompanyId) -> DomainResult<Option<Company>> {
        if id == self.ghost {
            return Ok(Some(Company {
                id,
                name: "Gone".into(),
            }));
        }
        CompanyRepository::find_by_id(&self.inner, id).await
    }

    async fn active_course_link(
        &self,
        course_id: CourseId,
    ) -> DomainResult<Option<CompanyCourseLink>> {
        self.inner.active_course_link(course_id).await
    }

    async fn insert_course_link(
        &self,
        link: CompanyCourseLink,
    ) -> DomainResult<CompanyCourseLink> {
        self.inner.insert_course_link(link).await
    }

    async fn suspend_course_link(
        &self,
        course_id: CourseId,
        at: DateTime<Utc>,
    ) -> DomainResult<Option<CompanyCourseLink>> {
        self.inner.suspend_course_link(course_id, at).await
    }

    async fn delete_course_links(&self, course_id: CourseId) -> DomainResult<u64> {
        self.inner.delete_course_links(course_id).await
    }

    async fn list_active_course_links(
        &self,
        company_id: CompanyId,
    ) -> DomainResult<Vec<CompanyCourseLink>> {
        self.inner.list_active_course_links(company_id).await
    }

    async fn active_user_link(
        &self,
        company_id: CompanyId,
        user_id: UserId,
    ) -> DomainResult<Option<CompanyUserLink>> {
        self.inner.active_user_link(company_id, user_id).await
    }

    async fn upsert_user_link(&self, link: CompanyUserLink) -> DomainResult<CompanyUserLink> {
        self.inner.upsert_user_link(link).await
    }

    async fn deactivate_user_link(
        &self,
        company_id: CompanyId,
        user_id: UserId,
    ) -> DomainResult<bool> {
        self.inner.deactivate_user_link(company_id, user_id).await
    }
}
