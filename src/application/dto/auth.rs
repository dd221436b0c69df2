use crate::domain::access::{PermissionMatrix, Principal};
use crate::domain::company::CompanyUserLink;
use crate::domain::user::{Plan, PlatformRole, User, UserId};

/// Identity handed to the engine by whatever authenticated the request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub role: PlatformRole,
    pub plan: Plan,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, username: impl Into<String>, role: PlatformRole, plan: Plan) -> Self {
        Self {
            id,
            username: username.into(),
            role,
            plan,
        }
    }

    pub fn principal(&self) -> Principal {
        Principal::new(self.id, self.role, self.plan)
    }

    pub fn is_admin(&self) -> bool {
        self.role == PlatformRole::Admin
    }
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.username.as_str(), user.role, user.plan)
    }
}

/// Builds the matrix for an optional viewer and the company link loaded for it.
pub fn matrix_for(
    actor: Option<&AuthenticatedUser>,
    membership: Option<CompanyUserLink>,
) -> PermissionMatrix {
    PermissionMatrix::new(actor.map(AuthenticatedUser::principal), membership)
}
