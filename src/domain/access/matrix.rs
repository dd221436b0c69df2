// src/domain/access/matrix.rs
use crate::domain::access::principal::Principal;
use crate::domain::company::{CompanyId, CompanyRole, CompanyUserLink, Ownership};
use crate::domain::content::ContentStatus;
use crate::domain::user::{Plan, PlatformRole, UserId};
use thiserror::Error;

/// Role snapshot of one viewer: platform identity plus the company link that
/// matters for the resource at hand. A missing link means "role not held".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionMatrix {
    principal: Option<Principal>,
    membership: Option<CompanyUserLink>,
}

impl PermissionMatrix {
    pub fn new(principal: Option<Principal>, membership: Option<CompanyUserLink>) -> Self {
        Self {
            principal,
            membership,
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_platform_admin(&self) -> bool {
        matches!(
            self.principal,
            Some(Principal {
                role: PlatformRole::Admin,
                ..
            })
        )
    }

    pub fn is_author(&self, author_id: UserId) -> bool {
        self.principal.is_some_and(|p| p.id == author_id)
    }

    pub fn has_pro_plan(&self) -> bool {
        self.principal.is_some_and(|p| p.plan == Plan::Pro)
    }

    fn company_role(&self, company: CompanyId) -> Option<CompanyRole> {
        let principal = self.principal?;
        self.membership
            .as_ref()
            .filter(|link| link.user_id == principal.id)
            .and_then(|link| link.role_in(company))
    }

    pub fn is_company_admin(&self, company: CompanyId) -> bool {
        self.company_role(company).is_some_and(CompanyRole::is_admin)
    }

    pub fn is_company_admin_or_editor(&self, company: CompanyId) -> bool {
        self.company_role(company).is_some_and(CompanyRole::can_edit)
    }

    pub fn is_company_user(&self, company: CompanyId) -> bool {
        self.company_role(company).is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeleteDenied {
    #[error("published course has active enrollments")]
    PublishedWithEnrollments,
    #[error("only admins may delete a published company course")]
    PublishedCompanyCourse,
    #[error("insufficient privileges to delete content")]
    NotAllowed,
}

/// The matrix evaluated against one item's author and ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentAccess {
    matrix: PermissionMatrix,
    author_id: UserId,
    ownership: Ownership,
}

impl ContentAccess {
    pub fn new(matrix: PermissionMatrix, author_id: UserId, ownership: Ownership) -> Self {
        Self {
            matrix,
            author_id,
            ownership,
        }
    }

    pub fn matrix(&self) -> &PermissionMatrix {
        &self.matrix
    }

    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    pub fn is_author(&self) -> bool {
        self.matrix.is_author(self.author_id)
    }

    fn is_company_admin(&self) -> bool {
        self.ownership
            .company()
            .is_some_and(|company| self.matrix.is_company_admin(company))
    }

    fn is_company_editor(&self) -> bool {
        self.ownership
            .company()
            .is_some_and(|company| self.matrix.is_company_admin_or_editor(company))
    }

    pub fn is_company_member(&self) -> bool {
        self.ownership
            .company()
            .is_some_and(|company| self.matrix.is_company_user(company))
    }

    /// Author, platform admin, or admin/editor of the owning company. The same
    /// set reads unpublished content in full.
    pub fn can_edit(&self) -> bool {
        self.matrix.is_platform_admin() || self.is_author() || self.is_company_editor()
    }

    /// May publish directly instead of landing in review.
    pub fn is_privileged(&self) -> bool {
        self.matrix.is_platform_admin() || self.is_company_admin()
    }

    pub fn can_delete(
        &self,
        status: ContentStatus,
        active_enrollments: u64,
    ) -> Result<(), DeleteDenied> {
        match self.ownership {
            Ownership::Platform => {
                if status.is_published() && active_enrollments > 0 {
                    return Err(DeleteDenied::PublishedWithEnrollments);
                }
                if self.matrix.is_platform_admin() || self.is_author() {
                    Ok(())
                } else {
                    Err(DeleteDenied::NotAllowed)
                }
            }
            Ownership::Company(_) => {
                if status.is_published() {
                    return if self.is_privileged() {
                        Ok(())
                    } else {
                        Err(DeleteDenied::PublishedCompanyCourse)
                    };
                }
                if self.matrix.is_platform_admin() || self.is_company_editor() {
                    Ok(())
                } else {
                    Err(DeleteDenied::NotAllowed)
                }
            }
        }
    }
}
