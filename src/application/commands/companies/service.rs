use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        services::{access::AccessService, catalog::CourseCatalog},
    },
    domain::{
        company::{Company, CompanyId, CompanyRepository},
        user::UserRepository,
    },
};

/// Manages which company owns which course and who belongs to a company.
pub struct CompanyCommandService {
    pub(super) companies: Arc<dyn CompanyRepository>,
    pub(super) users: Arc<dyn UserRepository>,
    pub(super) catalog: Arc<CourseCatalog>,
    pub(super) access: Arc<AccessService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CompanyCommandService {
    pub fn new(
        companies: Arc<dyn CompanyRepository>,
        users: Arc<dyn UserRepository>,
        catalog: Arc<CourseCatalog>,
        access: Arc<AccessService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            companies,
            users,
            catalog,
            access,
            clock,
        }
    }

    pub(super) async fn company(&self, raw_id: i64) -> ApplicationResult<Company> {
        let id = CompanyId::new(raw_id)?;
        self.companies
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("company not found"))
    }
}
