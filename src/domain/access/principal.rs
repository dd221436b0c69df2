use crate::domain::user::{Plan, PlatformRole, UserId};

/// Platform identity of an authenticated viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub id: UserId,
    pub role: PlatformRole,
    pub plan: Plan,
}

impl Principal {
    pub fn new(id: UserId, role: PlatformRole, plan: Plan) -> Self {
        Self { id, role, plan }
    }
}
