//! JSON body extraction
//!
//! Provides an `ApiJson` extractor whose rejections use the API error payload.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// A JSON extractor that reports unreadable bodies as `400 Bad request`
///
/// Use this instead of `Json<T>` for request bodies. Syntax errors, missing
/// fields, wrong field types and a missing `Content-Type` all end up as a
/// one-element `error` list describing the problem.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
