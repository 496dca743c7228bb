//! Email value object with a conservative shape check
//!
//! Accepts `local@domain` where the local part is non-empty and the domain
//! contains at least one dot with non-empty labels around it. This is not an
//! RFC 5322 parser.
//!
//! # Examples
//!
//! ```
//! use domain::Email;
//!
//! let email = Email::new("joao@email.com").unwrap();
//! assert_eq!(email.local_part(), "joao");
//! assert_eq!(email.domain(), "email.com");
//!
//! assert_eq!(
//!     Email::new("joao").unwrap_err().to_string(),
//!     "Email inválido: joao"
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{errors::DomainError, masking::mask_email};

/// A validated email address
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email {
    value: String,
}

impl Email {
    /// Create an email, validating its shape. The input is stored unchanged.
    pub fn new(email: impl Into<String>) -> Result<Self, DomainError> {
        let value = email.into();

        if !has_email_shape(&value) {
            return Err(DomainError::InvalidEmail(value));
        }

        Ok(Self { value })
    }

    /// Get the email address as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the local part (before @)
    pub fn local_part(&self) -> &str {
        self.value.split_once('@').map_or("", |(local, _)| local)
    }

    /// Get the domain part (after @)
    pub fn domain(&self) -> &str {
        self.value.split_once('@').map_or("", |(_, domain)| domain)
    }

    /// Redacted form for logs
    pub fn masked(&self) -> String {
        mask_email(&self.value)
    }
}

fn has_email_shape(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // at least two labels, none of them empty
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Email").field(&self.masked()).finish()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Email {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email_is_accepted() {
        let email = Email::new("joao.cardoso@email.com").unwrap();
        assert_eq!(email.as_str(), "joao.cardoso@email.com");
    }

    #[test]
    fn case_is_preserved() {
        let email = Email::new("Joao@Email.COM").unwrap();
        assert_eq!(email.as_str(), "Joao@Email.COM");
    }

    #[test]
    fn subdomains_are_accepted() {
        let email = Email::new("a@mail.example.com.br").unwrap();
        assert_eq!(email.domain(), "mail.example.com.br");
    }

    #[test]
    fn missing_at_is_rejected_with_raw_input() {
        assert_eq!(
            Email::new("joao"),
            Err(DomainError::InvalidEmail("joao".to_string()))
        );
    }

    #[test]
    fn undotted_domain_is_rejected() {
        assert!(Email::new("joao@localhost").is_err());
    }

    #[test]
    fn empty_local_part_is_rejected() {
        assert!(Email::new("@email.com").is_err());
    }

    #[test]
    fn two_at_signs_are_rejected() {
        assert!(Email::new("a@b@email.com").is_err());
    }

    #[test]
    fn empty_domain_labels_are_rejected() {
        assert!(Email::new("a@.com").is_err());
        assert!(Email::new("a@email.").is_err());
        assert!(Email::new("a@email..com").is_err());
    }

    #[test]
    fn whitespace_is_rejected() {
        assert!(Email::new(" joao@email.com").is_err());
        assert!(Email::new("jo ao@email.com").is_err());
    }

    #[test]
    fn parts_are_extracted() {
        let email = Email::new("maria@email.com").unwrap();
        assert_eq!(email.local_part(), "maria");
        assert_eq!(email.domain(), "email.com");
    }

    #[test]
    fn debug_is_masked() {
        let email = Email::new("joao@email.com").unwrap();
        assert_eq!(format!("{email:?}"), "Email(\"j***@email.com\")");
    }

    #[test]
    fn serialization_roundtrip() {
        let email = Email::new("test@example.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"test@example.com\"");
        let parsed: Email = serde_json::from_str(&json).unwrap();
        assert_eq!(email, parsed);
    }
}
