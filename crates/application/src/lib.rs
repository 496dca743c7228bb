//! Application layer - Use cases and orchestration
//!
//! Contains the registration and lookup use cases plus the port definitions
//! that infrastructure adapters implement.

pub mod dto;
pub mod error;
pub mod ports;
pub mod services;

pub use dto::CreateCustomerDto;
pub use error::{ApplicationError, PersistenceError, REGISTRATION_CONFLICT};
pub use ports::*;
pub use services::*;
