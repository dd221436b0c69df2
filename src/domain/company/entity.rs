// src/domain/company/entity.rs
use crate::domain::company::value_objects::{CompanyId, CompanyRole};
use crate::domain::course::CourseId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
}

/// Delegates ownership of a course to a company. At most one link per
/// course is active at any instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyCourseLink {
    pub company_id: CompanyId,
    pub course_id: CourseId,
    pub active: bool,
    pub linked_at: DateTime<Utc>,
    pub suspended_at: Option<DateTime<Utc>>,
}

impl CompanyCourseLink {
    pub fn new(company_id: CompanyId, course_id: CourseId, linked_at: DateTime<Utc>) -> Self {
        Self {
            company_id,
            course_id,
            active: true,
            linked_at,
            suspended_at: None,
        }
    }

    pub fn suspend(&mut self, at: DateTime<Utc>) {
        self.active = false;
        self.suspended_at = Some(at);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyUserLink {
    pub company_id: CompanyId,
    pub user_id: UserId,
    pub role: CompanyRole,
    pub active: bool,
}

impl CompanyUserLink {
    pub fn new(company_id: CompanyId, user_id: UserId, role: CompanyRole) -> Self {
        Self {
            company_id,
            user_id,
            role,
            active: true,
        }
    }

    /// Role held in `company`, if this link is active and points there.
    pub fn role_in(&self, company: CompanyId) -> Option<CompanyRole> {
        (self.active && self.company_id == company).then_some(self.role)
    }
}
