//! Customer name value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A non-blank customer name, stored with surrounding whitespace trimmed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name {
    value: String,
}

impl Name {
    /// Create a name, rejecting empty or whitespace-only input
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let value = name.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::BlankName);
        }

        Ok(Self { value })
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<String> for Name {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Name {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.value
    }
}
