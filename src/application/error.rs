// src/application/error.rs
use crate::domain::{
    access::DeleteDenied, content::ReactionRejected, errors::DomainError,
};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Outcomes surfaced to callers. `NotFound`, `Forbidden` and `Unauthorized`
/// are expected results, never retried here.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    /// The viewer is anonymous but the operation needs an identity.
    #[error("unauthenticated: {0}")]
    Unauthorized(String),

    /// The viewer is known but lacks the required role.
    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::Conflict(msg) => Self::Conflict(msg),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::Persistence(msg) => Self::Infrastructure(msg),
        }
    }
}

impl From<ReactionRejected> for ApplicationError {
    fn from(err: ReactionRejected) -> Self {
        Self::Forbidden(err.to_string())
    }
}

impl From<DeleteDenied> for ApplicationError {
    fn from(err: DeleteDenied) -> Self {
        Self::Forbidden(err.to_string())
    }
}
