//! Domain-level errors
//!
//! The display strings of the validation variants are part of the public API:
//! they are returned verbatim to HTTP clients.

use thiserror::Error;

/// Errors raised while constructing domain values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// CPF is not exactly 11 ASCII digits
    #[error("CPF inválido: {0}")]
    InvalidCpf(String),

    /// Email does not have the `local@domain.tld` shape
    #[error("Email inválido: {0}")]
    InvalidEmail(String),

    /// Phone is not 10 or 11 ASCII digits
    #[error("Formato de telefone inválido. Deve conter entre 10 e 11 dígitos numéricos.")]
    InvalidPhone,

    /// Name is empty or whitespace only
    #[error("Nome não pode estar em branco")]
    BlankName,

    /// A required input was not supplied at all
    #[error("Campo obrigatório ausente: {0}")]
    MissingField(String),

    /// Identifier text is not a UUID
    #[error("Identificador inválido: {0}")]
    InvalidIdentifier(String),
}

impl DomainError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }
}
