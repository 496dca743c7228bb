//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod customer_repository;
mod database_health_port;

pub use customer_repository::CustomerRepository;
#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
#[cfg(test)]
pub use database_health_port::MockDatabaseHealthPort;
pub use database_health_port::{DatabaseHealth, DatabaseHealthPort};
