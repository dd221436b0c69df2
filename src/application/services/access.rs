// src/application/services/access.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, auth::matrix_for},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        access::{ContentAccess, PermissionMatrix},
        article::Article,
        company::{CompanyId, CompanyRepository, Ownership, OwnershipResolver},
        course::Course,
    },
};

/// Loads role snapshots for the permission matrix and runs the composite
/// guards. Every call reads fresh link state.
pub struct AccessService {
    companies: Arc<dyn CompanyRepository>,
    resolver: OwnershipResolver,
}

impl AccessService {
    pub fn new(companies: Arc<dyn CompanyRepository>) -> Self {
        let resolver = OwnershipResolver::new(Arc::clone(&companies));
        Self {
            companies,
            resolver,
        }
    }

    pub async fn ownership(&self, course: &Course) -> ApplicationResult<Ownership> {
        Ok(self.resolver.resolve(course.id).await?)
    }

    pub async fn matrix(
        &self,
        actor: Option<&AuthenticatedUser>,
        company: Option<CompanyId>,
    ) -> ApplicationResult<PermissionMatrix> {
        let membership = match (actor, company) {
            (Some(actor), Some(company)) => {
                self.companies.active_user_link(company, actor.id).await?
            }
            _ => None,
        };
        Ok(matrix_for(actor, membership))
    }

    /// Articles are always platform-owned.
    pub fn article_access(
        &self,
        actor: Option<&AuthenticatedUser>,
        article: &Article,
    ) -> ContentAccess {
        ContentAccess::new(matrix_for(actor, None), article.author_id, Ownership::Platform)
    }

    pub async fn course_access(
        &self,
        actor: Option<&AuthenticatedUser>,
        course: &Course,
    ) -> ApplicationResult<ContentAccess> {
        let ownership = self.ownership(course).await?;
        let matrix = self.matrix(actor, ownership.company()).await?;
        Ok(ContentAccess::new(matrix, course.author_id, ownership))
    }

    pub async fn require_admin_or_company_admin(
        &self,
        actor: &AuthenticatedUser,
        company: CompanyId,
    ) -> ApplicationResult<()> {
        let matrix = self.matrix(Some(actor), Some(company)).await?;
        guard(
            matrix.is_platform_admin() || matrix.is_company_admin(company),
            actor,
            company,
            "company admin",
        )
    }

    pub async fn require_admin_or_company_admin_or_editor(
        &self,
        actor: &AuthenticatedUser,
        company: CompanyId,
    ) -> ApplicationResult<()> {
        let matrix = self.matrix(Some(actor), Some(company)).await?;
        guard(
            matrix.is_platform_admin() || matrix.is_company_admin_or_editor(company),
            actor,
            company,
            "company admin or editor",
        )
    }

    pub async fn require_admin_or_company_user(
        &self,
        actor: &AuthenticatedUser,
        company: CompanyId,
    ) -> ApplicationResult<()> {
        let matrix = self.matrix(Some(actor), Some(company)).await?;
        guard(
            matrix.is_platform_admin() || matrix.is_company_user(company),
            actor,
            company,
            "company member",
        )
    }
}

fn guard(
    allowed: bool,
    actor: &AuthenticatedUser,
    company: CompanyId,
    required: &str,
) -> ApplicationResult<()> {
    if allowed {
        Ok(())
    } else {
        tracing::debug!(user_id = %actor.id, company_id = %company, required, "company guard denied");
        Err(ApplicationError::forbidden(format!(
            "platform admin or {required} role required"
        )))
    }
}

/// Unwraps the viewer for operations that need an identity.
pub fn require_authenticated(
    actor: Option<&AuthenticatedUser>,
) -> ApplicationResult<&AuthenticatedUser> {
    actor.ok_or_else(|| ApplicationError::unauthorized("authentication required"))
}
