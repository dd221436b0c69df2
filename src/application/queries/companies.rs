// src/application/queries/companies.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, CourseLinkDto},
        error::ApplicationResult,
        services::access::AccessService,
    },
    domain::company::{CompanyId, CompanyRepository},
};

pub struct ListCompanyCoursesQuery {
    pub company_id: i64,
}

pub struct CompanyQueryService {
    companies: Arc<dyn CompanyRepository>,
    access: Arc<AccessService>,
}

impl CompanyQueryService {
    pub fn new(companies: Arc<dyn CompanyRepository>, access: Arc<AccessService>) -> Self {
        Self { companies, access }
    }

    /// Courses currently owned by the company. Visible to its members only.
    pub async fn list_course_links(
        &self,
        actor: &AuthenticatedUser,
        query: ListCompanyCoursesQuery,
    ) -> ApplicationResult<Vec<CourseLinkDto>> {
        let company_id = CompanyId::new(query.company_id)?;
        self.access
            .require_admin_or_company_user(actor, company_id)
            .await?;

        let links = self.companies.list_active_course_links(company_id).await?;
        Ok(links.into_iter().map(CourseLinkDto::from).collect())
    }
}
