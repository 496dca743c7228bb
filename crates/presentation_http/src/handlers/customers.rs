//! Customer handlers
//!
//! `GET /customers?cpf=...` looks a customer up, `POST /customers` registers one.

use std::fmt;

use application::CreateCustomerDto;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use domain::{
    Customer,
    masking::{mask_cpf, mask_email, mask_phone},
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::{IntoParams, ToSchema};

use crate::{error::ApiError, middleware::ApiJson, state::AppState};

// ---------------------------------------------------------------------------
// Response / request DTOs
// ---------------------------------------------------------------------------

/// Customer as returned by the API
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": "0b9f4c3e-5d7a-4f8e-9a55-1f2d3c4b5a69",
    "name": "João da Silva",
    "cpf": "12345678910",
    "email": "joao@email.com",
    "phone": "11999990000"
}))]
pub struct CustomerResponse {
    /// Customer identifier
    pub id: String,
    /// Full name
    pub name: String,
    /// CPF, 11 digits
    pub cpf: String,
    /// Email address
    pub email: String,
    /// Phone number, 10 or 11 digits
    pub phone: String,
}

impl From<&Customer> for CustomerResponse {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id().to_string(),
            name: customer.name().to_string(),
            cpf: customer.cpf().to_string(),
            email: customer.email().to_string(),
            phone: customer.phone().to_string(),
        }
    }
}

impl fmt::Debug for CustomerResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomerResponse")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("cpf", &mask_cpf(&self.cpf))
            .field("email", &mask_email(&self.email))
            .field("phone", &mask_phone(&self.phone))
            .finish()
    }
}

/// Registration request body
///
/// Fields are taken as plain strings; their format is checked by the
/// registration use case, not by deserialization.
#[derive(Clone, Deserialize, ToSchema)]
#[schema(example = json!({
    "name": "João da Silva",
    "cpf": "12345678910",
    "email": "joao@email.com",
    "phone": "11999990000"
}))]
pub struct CreateCustomerRequest {
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub phone: String,
}

impl From<CreateCustomerRequest> for CreateCustomerDto {
    fn from(req: CreateCustomerRequest) -> Self {
        Self::new(req.name, req.cpf, req.email, req.phone)
    }
}

impl fmt::Debug for CreateCustomerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateCustomerRequest")
            .field("name", &self.name)
            .field("cpf", &mask_cpf(&self.cpf))
            .field("email", &mask_email(&self.email))
            .field("phone", &mask_phone(&self.phone))
            .finish()
    }
}

/// Query parameters for customer lookup
#[derive(Deserialize, IntoParams)]
pub struct CustomerQuery {
    /// CPF to look up; required
    pub cpf: Option<String>,
}

impl fmt::Debug for CustomerQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomerQuery")
            .field("cpf", &self.cpf.as_deref().map(mask_cpf))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Find a customer by CPF
#[utoipa::path(
    get,
    path = "/customers",
    tag = "customers",
    params(CustomerQuery),
    responses(
        (status = 200, description = "Customer found", body = CustomerResponse),
        (status = 400, description = "CPF parameter missing", body = crate::error::ErrorResponse),
        (status = 404, description = "No customer with this CPF", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_customer(
    State(state): State<AppState>,
    Query(query): Query<CustomerQuery>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let customer = state
        .customer_service
        .find_by_cpf(query.cpf.as_deref())
        .await?;

    Ok(Json(CustomerResponse::from(&customer)))
}

/// Register a new customer
#[utoipa::path(
    post,
    path = "/customers",
    tag = "customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer registered", body = CustomerResponse),
        (status = 400, description = "Invalid field or unreadable body", body = crate::error::ErrorResponse),
        (status = 409, description = "CPF, email or phone already registered", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_customer(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiError> {
    let customer = state.customer_service.register(request.into()).await?;

    info!(customer_id = %customer.id(), "Customer created");

    Ok((StatusCode::CREATED, Json(CustomerResponse::from(&customer))))
}
