use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompanyId(pub i64);

impl CompanyId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("company id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CompanyId> for i64 {
    fn from(value: CompanyId) -> Self {
        value.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role a user holds inside one company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyRole {
    Admin,
    Editor,
    Viewer,
}

impl CompanyRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyRole::Admin => "admin",
            CompanyRole::Editor => "editor",
            CompanyRole::Viewer => "viewer",
        }
    }

    pub fn is_admin(self) -> bool {
        matches!(self, CompanyRole::Admin)
    }

    pub fn can_edit(self) -> bool {
        match self {
            CompanyRole::Admin | CompanyRole::Editor => true,
            CompanyRole::Viewer => false,
        }
    }
}

impl fmt::Display for CompanyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanyRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(CompanyRole::Admin),
            "editor" => Ok(CompanyRole::Editor),
            "viewer" => Ok(CompanyRole::Viewer),
            other => Err(DomainError::Validation(format!(
                "unknown company role '{other}'"
            ))),
        }
    }
}
