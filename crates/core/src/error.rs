//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// uniqueness, lifecycle conflicts). Every variant except `Internal` is an
/// expected outcome the caller can act on.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed or out-of-range input).
    ///
    /// `details` optionally carries structured context for the caller, such as
    /// the list of missing required fields.
    #[error("validation failed: {message}")]
    Validation {
        message: String,
        details: Option<serde_json::Value>,
    },

    /// A referenced record is absent or invisible (soft-deleted).
    #[error("not found: {0}")]
    NotFound(String),

    /// A uniqueness constraint would be violated.
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// An optimistic-concurrency token did not match the current version.
    /// Recoverable: re-read and retry.
    #[error("version conflict: {0}")]
    VersionConflict(String),

    /// An illegal lifecycle transition (e.g. publishing twice).
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// An unexpected internal fault. Logged at the boundary and surfaced
    /// generically, never with internals attached.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            details: None,
        }
    }

    pub fn validation_with_details(
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self::Validation {
            message: message.into(),
            details: Some(details),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::Duplicate(message.into())
    }

    pub fn version_conflict(message: impl Into<String>) -> Self {
        Self::VersionConflict(message.into())
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
