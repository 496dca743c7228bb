//! Customer registry HTTP presentation layer
//!
//! This crate provides the HTTP API over the registration and lookup use cases.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse, set_expose_internal_errors};
pub use middleware::ApiJson;
pub use routes::create_router;
pub use state::AppState;
