//! Redaction helpers for personal data in logs and debug output
//!
//! # Examples
//!
//! ```
//! use domain::masking::{mask_cpf, mask_email, mask_phone};
//!
//! assert_eq!(mask_cpf("12345678910"), "123******10");
//! assert_eq!(mask_email("joao@email.com"), "j***@email.com");
//! assert_eq!(mask_phone("11999990000"), "*******0000");
//! ```

const MASK: char = '*';

/// Keep `head` leading and `tail` trailing characters, mask the rest.
///
/// Values too short to keep anything hidden are masked entirely.
fn mask_middle(value: &str, head: usize, tail: usize) -> String {
    let len = value.chars().count();
    if len <= head + tail {
        return MASK.to_string().repeat(len);
    }

    value
        .chars()
        .enumerate()
        .map(|(i, c)| if i < head || i >= len - tail { c } else { MASK })
        .collect()
}

/// Mask a CPF, keeping the first three and last two digits
pub fn mask_cpf(cpf: &str) -> String {
    mask_middle(cpf, 3, 2)
}

/// Mask the local part of an email, keeping its first character and the domain
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{first}***@{domain}")
        },
        _ => MASK.to_string().repeat(email.chars().count()),
    }
}

/// Mask a phone number, keeping the last four digits
pub fn mask_phone(phone: &str) -> String {
    mask_middle(phone, 0, 4)
}
