use crate::domain::company::{CompanyCourseLink, CompanyRole, CompanyUserLink};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseLinkDto {
    pub company_id: i64,
    pub course_id: i64,
    pub active: bool,
    pub linked_at: DateTime<Utc>,
    #[serde(default)]
    pub suspended_at: Option<DateTime<Utc>>,
}

impl From<CompanyCourseLink> for CourseLinkDto {
    fn from(link: CompanyCourseLink) -> Self {
        Self {
            company_id: link.company_id.into(),
            course_id: link.course_id.into(),
            active: link.active,
            linked_at: link.linked_at,
            suspended_at: link.suspended_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDto {
    pub company_id: i64,
    pub user_id: i64,
    pub role: CompanyRole,
    pub active: bool,
}

impl From<CompanyUserLink> for MemberDto {
    fn from(link: CompanyUserLink) -> Self {
        Self {
            company_id: link.company_id.into(),
            user_id: link.user_id.into(),
            role: link.role,
            active: link.active,
        }
    }
}
