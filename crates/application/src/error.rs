//! Application-level errors
//!
//! Every use case failure falls in one of four classes: validation (client sent
//! bad input), not found, conflict (business-rule violation on uniqueness), or
//! persistence (infrastructure failure).

use domain::DomainError;
use thiserror::Error;

/// Message reported for any registration uniqueness conflict
pub const REGISTRATION_CONFLICT: &str =
    "Customer registration failed due to business rule violation";

/// Storage failures reported by repository adapters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    /// A storage-level uniqueness constraint rejected the write
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    /// A stored row could not be turned back into a domain value
    #[error("Corrupt record: {0}")]
    CorruptRecord(String),

    /// Any other storage failure
    #[error("Storage failure: {0}")]
    Storage(String),
}

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Input failed a value-object rule
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// Lookup yielded no record
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// Registration collides with an existing customer
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Infrastructure failure
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl ApplicationError {
    /// Create a not found error
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    /// Create the standard registration conflict
    pub fn registration_conflict() -> Self {
        Self::Conflict(REGISTRATION_CONFLICT.to_string())
    }

    /// Whether the caller caused this error (and must change its input)
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::NotFound { .. } | Self::Conflict(_)
        )
    }

    /// Whether this is a storage-level uniqueness violation
    pub const fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            Self::Persistence(PersistenceError::UniqueViolation(_))
        )
    }
}
