//! Application services - Use case implementations

mod customer_service;

pub use customer_service::{CustomerService, RegistrationStage};
