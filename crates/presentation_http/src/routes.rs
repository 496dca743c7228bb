//! Route definitions

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::{handlers, openapi, state::AppState};

/// Create the main router with all routes
///
/// Requests are traced, and bodies larger than `max_body_size` bytes are
/// refused with `413`.
pub fn create_router(state: AppState, max_body_size: usize) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Customer API
        .route(
            "/customers",
            get(handlers::customers::get_customer).post(handlers::customers::create_customer),
        )
        // API documentation
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(max_body_size)),
        )
}
