//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// missing entities, state machine violations). Infrastructure concerns
/// belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed email, negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced entity id does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A credential check failed.
    ///
    /// Carries no entity detail: callers must not be able to tell a bad
    /// password apart from an unknown email or an expired token.
    #[error("authentication failed")]
    AuthFailure,

    /// A disallowed status transition was requested.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(entity: impl Into<String>) -> Self {
        Self::NotFound(entity.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}
