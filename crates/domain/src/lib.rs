//! Domain layer for the customer registry
//!
//! Contains the customer entity, its self-validating value objects and the
//! domain errors. Nothing here performs I/O.

pub mod entities;
pub mod errors;
pub mod masking;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
