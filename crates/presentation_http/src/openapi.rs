//! OpenAPI documentation module
//!
//! Serves the OpenAPI 3 document for the customer API as JSON.

// Allow clippy warnings from macro-generated code in utoipa derive
#![allow(clippy::needless_for_each)]

use axum::Json;
use utoipa::OpenApi;

use crate::handlers;

/// OpenAPI documentation for the customer API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Customer Registry API",
        description = "Register customers and look them up by CPF",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "health", description = "Health check and readiness endpoints"),
        (name = "customers", description = "Customer registration and lookup")
    ),
    paths(
        handlers::health::health_check,
        handlers::health::readiness_check,
        handlers::customers::get_customer,
        handlers::customers::create_customer,
    ),
    components(
        schemas(
            handlers::health::HealthResponse,
            handlers::health::ReadinessResponse,
            handlers::health::DatabaseStatus,
            handlers::customers::CustomerResponse,
            handlers::customers::CreateCustomerRequest,
            crate::error::ErrorResponse,
        )
    )
)]
#[derive(Debug)]
pub struct ApiDoc;

/// Serve the OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
