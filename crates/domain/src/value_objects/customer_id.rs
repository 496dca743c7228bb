//! Customer identifier value object
//!
//! # Examples
//!
//! ```
//! use domain::CustomerId;
//!
//! // Create a new random customer ID
//! let customer_id = CustomerId::generate();
//! assert!(!customer_id.to_string().is_empty());
//!
//! // Parse from string
//! let parsed = CustomerId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
//! assert_eq!(parsed.to_string(), "550e8400-e29b-41d4-a716-446655440000");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// A unique customer identifier
///
/// Equality and hashing follow the wrapped UUID, and the string form is the
/// canonical hyphenated UUID text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(Uuid);

impl CustomerId {
    /// Create a new random customer ID
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::CustomerId;
    ///
    /// let id1 = CustomerId::generate();
    /// let id2 = CustomerId::generate();
    /// assert_ne!(id1, id2);
    /// ```
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a customer ID from an existing UUID
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a customer ID from its textual form
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::CustomerId;
    ///
    /// assert!(CustomerId::parse("550e8400-e29b-41d4-a716-446655440000").is_ok());
    /// assert!(CustomerId::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| DomainError::InvalidIdentifier(s.to_string()))
    }

    /// Get the underlying UUID
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for CustomerId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
