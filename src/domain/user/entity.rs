// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Plan, PlatformRole, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub role: PlatformRole,
    pub plan: Plan,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == PlatformRole::Admin
    }
}
