// src/domain/company/services.rs
use std::sync::Arc;

use crate::domain::company::{ownership::Ownership, repository::CompanyRepository};
use crate::domain::course::CourseId;
use crate::domain::errors::DomainResult;

/// Domain service deciding whether a course is platform- or company-owned.
///
/// Nothing is cached: links can be suspended while a course is being edited,
/// so every check reads the current active link.
pub struct OwnershipResolver {
    companies: Arc<dyn CompanyRepository>,
}

impl OwnershipResolver {
    pub fn new(companies: Arc<dyn CompanyRepository>) -> Self {
        Self { companies }
    }

    pub async fn resolve(&self, course_id: CourseId) -> DomainResult<Ownership> {
        let link = self.companies.active_course_link(course_id).await?;
        Ok(match link {
            Some(link) if link.active => Ownership::Company(link.company_id),
            _ => Ownership::Platform,
        })
    }
}
