//! HTTP middleware components

pub mod json;

pub use json::ApiJson;
