//! Customer repository port
//!
//! Defines how the application reads and writes customers. Adapters receive and
//! return plain `Customer` snapshots; there is no session or identity map.

use async_trait::async_trait;
use domain::Customer;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for customer persistence and uniqueness lookups
///
/// Implementations must enforce uniqueness of CPF, email and phone at the
/// storage level and report a violated constraint from [`save`] as
/// `PersistenceError::UniqueViolation`.
///
/// [`save`]: CustomerRepository::save
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find the customer registered with the given CPF
    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Customer>, ApplicationError>;

    /// Whether any stored customer matches the CPF, the email, or the phone
    ///
    /// This is a pre-flight check; it is not atomic with a subsequent `save`.
    async fn exists(&self, cpf: &str, email: &str, phone: &str)
    -> Result<bool, ApplicationError>;

    /// Persist a new customer and return the stored representation
    async fn save(&self, customer: &Customer) -> Result<Customer, ApplicationError>;
}
