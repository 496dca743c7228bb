//! API error handling
//!
//! Maps application failures onto the public error payloads. Internal
//! failures never carry details unless exposure is switched on, which the
//! server only does outside production.

use std::sync::atomic::{AtomicBool, Ordering};

use application::ApplicationError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};
use utoipa::ToSchema;

/// Global flag to control error detail exposure
static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(true);

/// Configure whether internal error details should be exposed in responses
pub fn set_expose_internal_errors(expose: bool) {
    EXPOSE_INTERNAL_ERRORS.store(expose, Ordering::SeqCst);
}

fn should_expose_details() -> bool {
    EXPOSE_INTERNAL_ERRORS.load(Ordering::SeqCst)
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client input rejected; carries at most the first validation message
    #[error("Bad request: {}", .0.join("; "))]
    BadRequest(Vec<String>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Payload too large")]
    PayloadTooLarge,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
///
/// `status` appears on conflict and server-side failures only; `error` is
/// omitted when there is nothing to list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "message": "Bad request",
    "error": ["CPF inválido: 123"]
}))]
pub struct ErrorResponse {
    /// HTTP status code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Error summary
    pub message: String,
    /// Error details
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub error: Vec<String>,
}

impl ApiError {
    /// Bad request reporting a single message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(vec![message.into()])
    }

    /// Status code and body for this error
    fn to_parts(&self, expose_details: bool) -> (StatusCode, ErrorResponse) {
        match self {
            Self::BadRequest(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    status: None,
                    message: "Bad request".to_string(),
                    error: errors.clone(),
                },
            ),
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    status: None,
                    message: "Entity not found".to_string(),
                    error: Vec::new(),
                },
            ),
            Self::Conflict(msg) => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    status: Some(StatusCode::CONFLICT.as_u16()),
                    message: "Resource conflict".to_string(),
                    error: vec![msg.clone()],
                },
            ),
            Self::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ErrorResponse {
                    status: Some(StatusCode::PAYLOAD_TOO_LARGE.as_u16()),
                    message: "Payload too large".to_string(),
                    error: Vec::new(),
                },
            ),
            Self::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    status: Some(StatusCode::INTERNAL_SERVER_ERROR.as_u16()),
                    message: "Internal server error".to_string(),
                    error: if expose_details {
                        vec![msg.clone()]
                    } else {
                        Vec::new()
                    },
                },
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal(msg) => error!(error = %msg, "Request failed"),
            other => debug!(error = %other, "Request rejected"),
        }

        let (status, body) = self.to_parts(should_expose_details());
        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(DomainError::MissingField(_)) => Self::BadRequest(vec![]),
            ApplicationError::Validation(e) => Self::bad_request(e.to_string()),
            e @ ApplicationError::NotFound { .. } => Self::NotFound(e.to_string()),
            ApplicationError::Conflict(msg) => Self::Conflict(msg),
            ApplicationError::Persistence(e) => Self::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge
        } else {
            Self::bad_request(rejection.body_text())
        }
    }
}
