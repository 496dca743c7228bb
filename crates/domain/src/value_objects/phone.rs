//! Phone value object
//!
//! Digits only, 10 or 11 of them (area code plus a landline or mobile number).
//! No separators are stripped and no country code is recognised.

use std::{fmt, ops::RangeInclusive};

use serde::{Deserialize, Serialize};

use crate::{errors::DomainError, masking::mask_phone};

/// Accepted number of digits
pub const PHONE_DIGITS: RangeInclusive<usize> = 10..=11;

/// A validated phone number
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone {
    value: String,
}

impl Phone {
    /// Create a phone number, rejecting anything other than 10-11 ASCII digits
    pub fn new(phone: impl Into<String>) -> Result<Self, DomainError> {
        let value = phone.into();

        if !PHONE_DIGITS.contains(&value.len()) || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidPhone);
        }

        Ok(Self { value })
    }

    /// Get the phone digits
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Redacted form for logs
    pub fn masked(&self) -> String {
        mask_phone(&self.value)
    }
}

impl fmt::Debug for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Phone").field(&self.masked()).finish()
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<String> for Phone {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Phone {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_digit_landline_is_accepted() {
        assert_eq!(Phone::new("1133334444").unwrap().as_str(), "1133334444");
    }

    #[test]
    fn eleven_digit_mobile_is_accepted() {
        assert_eq!(Phone::new("11999990000").unwrap().as_str(), "11999990000");
    }

    #[test]
    fn too_short_is_rejected() {
        assert_eq!(Phone::new("11345"), Err(DomainError::InvalidPhone));
    }

    #[test]
    fn too_long_is_rejected() {
        assert_eq!(Phone::new("119999900001"), Err(DomainError::InvalidPhone));
    }

    #[test]
    fn separators_are_rejected() {
        assert!(Phone::new("(11) 99999-0000").is_err());
        assert!(Phone::new("+5511999990000").is_err());
    }

    #[test]
    fn letters_are_rejected() {
        assert!(Phone::new("11999abc000").is_err());
    }

    #[test]
    fn error_message_is_fixed() {
        let err = Phone::new("abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Formato de telefone inválido. Deve conter entre 10 e 11 dígitos numéricos."
        );
    }

    #[test]
    fn debug_is_masked() {
        let phone = Phone::new("11999990000").unwrap();
        assert_eq!(format!("{phone:?}"), "Phone(\"*******0000\")");
    }
}
