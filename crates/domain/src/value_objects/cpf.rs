//! CPF (Brazilian individual taxpayer number) value object
//!
//! Only the shape is checked: exactly eleven ASCII digits, no punctuation.
//! Check digits are not verified.
//!
//! # Examples
//!
//! ```
//! use domain::Cpf;
//!
//! let cpf = Cpf::new("12345678910").unwrap();
//! assert_eq!(cpf.as_str(), "12345678910");
//!
//! let err = Cpf::new("123.456.789-10").unwrap_err();
//! assert_eq!(err.to_string(), "CPF inválido: 123.456.789-10");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{errors::DomainError, masking::mask_cpf};

/// Number of digits in a CPF
pub const CPF_LENGTH: usize = 11;

/// A validated CPF
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf {
    value: String,
}

impl Cpf {
    /// Create a CPF, rejecting anything other than eleven ASCII digits
    pub fn new(cpf: impl Into<String>) -> Result<Self, DomainError> {
        let value = cpf.into();

        if value.len() != CPF_LENGTH || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidCpf(value));
        }

        Ok(Self { value })
    }

    /// Get the CPF digits
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Redacted form for logs
    pub fn masked(&self) -> String {
        mask_cpf(&self.value)
    }
}

impl fmt::Debug for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cpf").field(&self.masked()).finish()
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<String> for Cpf {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Cpf {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.value
    }
}
