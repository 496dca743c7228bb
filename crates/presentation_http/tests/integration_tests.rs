//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::{collections::HashMap, sync::Arc};

use application::{
    CustomerService,
    error::{ApplicationError, PersistenceError},
    ports::{CustomerRepository, DatabaseHealth, DatabaseHealthPort},
};
use async_trait::async_trait;
use axum_test::TestServer;
use domain::Customer;
use presentation_http::{routes::create_router, state::AppState};
use serde_json::json;
use tokio::sync::RwLock;

const MAX_BODY: usize = 64 * 1024;

/// In-memory repository keyed by CPF
#[derive(Default)]
struct InMemoryCustomerRepository {
    customers: RwLock<HashMap<String, Customer>>,
    /// When set, `exists` always answers `false`, as a check racing with
    /// another registration would
    stale_checks: bool,
}

impl InMemoryCustomerRepository {
    fn with_stale_checks() -> Self {
        Self {
            stale_checks: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Customer>, ApplicationError> {
        Ok(self.customers.read().await.get(cpf).cloned())
    }

    async fn exists(&self, cpf: &str, email: &str, phone: &str) -> Result<bool, ApplicationError> {
        if self.stale_checks {
            return Ok(false);
        }
        let customers = self.customers.read().await;
        Ok(customers.values().any(|c| {
            c.cpf().as_str() == cpf || c.email().as_str() == email || c.phone().as_str() == phone
        }))
    }

    async fn save(&self, customer: &Customer) -> Result<Customer, ApplicationError> {
        let mut customers = self.customers.write().await;
        let clash = customers.values().find_map(|c| {
            if c.cpf() == customer.cpf() {
                Some("customers.cpf")
            } else if c.email() == customer.email() {
                Some("customers.email")
            } else if c.phone() == customer.phone() {
                Some("customers.phone")
            } else {
                None
            }
        });
        if let Some(column) = clash {
            return Err(PersistenceError::UniqueViolation(format!(
                "UNIQUE constraint failed: {column}"
            ))
            .into());
        }
        customers.insert(customer.cpf().to_string(), customer.clone());
        Ok(customer.clone())
    }
}

/// Repository whose storage is down
struct BrokenRepository;

#[async_trait]
impl CustomerRepository for BrokenRepository {
    async fn find_by_cpf(&self, _: &str) -> Result<Option<Customer>, ApplicationError> {
        Err(PersistenceError::Storage("database is locked".to_string()).into())
    }

    async fn exists(&self, _: &str, _: &str, _: &str) -> Result<bool, ApplicationError> {
        Err(PersistenceError::Storage("database is locked".to_string()).into())
    }

    async fn save(&self, _: &Customer) -> Result<Customer, ApplicationError> {
        Err(PersistenceError::Storage("database is locked".to_string()).into())
    }
}

/// Database probe with a fixed answer
struct FixedHealth(bool);

#[async_trait]
impl DatabaseHealthPort for FixedHealth {
    async fn check_health(&self) -> Result<DatabaseHealth, ApplicationError> {
        Ok(if self.0 {
            DatabaseHealth::healthy().with_response_time(1)
        } else {
            DatabaseHealth::unhealthy()
        })
    }
}

fn create_server_with(repository: Arc<dyn CustomerRepository>, healthy: Option<bool>) -> TestServer {
    let mut state = AppState::new(Arc::new(CustomerService::new(repository)));
    if let Some(healthy) = healthy {
        state = state.with_database_health(Arc::new(FixedHealth(healthy)));
    }
    TestServer::new(create_router(state, MAX_BODY)).expect("Failed to create test server")
}

fn create_test_server() -> TestServer {
    create_server_with(Arc::new(InMemoryCustomerRepository::default()), Some(true))
}

fn joao() -> serde_json::Value {
    json!({
        "name": "João da Silva",
        "cpf": "12345678910",
        "email": "joao@email.com",
        "phone": "11999990000"
    })
}

// ============ Lookup Tests ============

#[tokio::test]
async fn lookup_without_cpf_is_bad_request() {
    let server = create_test_server();

    let response = server.get("/customers").await;

    response.assert_status_bad_request();
    response.assert_json(&json!({"message": "Bad request"}));
}

#[tokio::test]
async fn lookup_with_blank_cpf_is_bad_request() {
    let server = create_test_server();

    let response = server.get("/customers").add_query_param("cpf", "").await;

    response.assert_status_bad_request();
    response.assert_json(&json!({"message": "Bad request"}));
}

#[tokio::test]
async fn lookup_of_unknown_cpf_is_not_found() {
    let server = create_test_server();

    let response = server
        .get("/customers")
        .add_query_param("cpf", "12345678910")
        .await;

    response.assert_status_not_found();
    response.assert_json(&json!({"message": "Entity not found"}));
}

#[tokio::test]
async fn lookup_returns_registered_customer() {
    let server = create_test_server();
    server.post("/customers").json(&joao()).await.assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .get("/customers")
        .add_query_param("cpf", "12345678910")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["cpf"], "12345678910");
    assert_eq!(body["name"], "João da Silva");
    assert_eq!(body["email"], "joao@email.com");
    assert_eq!(body["phone"], "11999990000");
    assert!(body["id"].is_string());
}

// ============ Registration Tests ============

#[tokio::test]
async fn register_valid_customer_is_created() {
    let server = create_test_server();

    let response = server.post("/customers").json(&joao()).await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["cpf"], "12345678910");
    assert_eq!(body["name"], "João da Silva");
}

#[tokio::test]
async fn register_with_short_cpf_is_bad_request() {
    let server = create_test_server();
    let mut input = joao();
    input["cpf"] = json!("123");

    let response = server.post("/customers").json(&input).await;

    response.assert_status_bad_request();
    response.assert_json(&json!({
        "message": "Bad request",
        "error": ["CPF inválido: 123"]
    }));
}

#[tokio::test]
async fn register_with_bad_email_is_bad_request() {
    let server = create_test_server();
    let mut input = joao();
    input["email"] = json!("joao.email.com");

    let response = server.post("/customers").json(&input).await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"][0], "Email inválido: joao.email.com");
}

#[tokio::test]
async fn register_with_bad_phone_is_bad_request() {
    let server = create_test_server();
    let mut input = joao();
    input["phone"] = json!("11-9999-0000");

    let response = server.post("/customers").json(&input).await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["error"][0],
        "Formato de telefone inválido. Deve conter entre 10 e 11 dígitos numéricos."
    );
}

#[tokio::test]
async fn register_reports_only_first_failure() {
    let server = create_test_server();

    let response = server
        .post("/customers")
        .json(&json!({"name": "Ana", "cpf": "1", "email": "x", "phone": "2"}))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({
        "message": "Bad request",
        "error": ["CPF inválido: 1"]
    }));
}

#[tokio::test]
async fn register_duplicate_is_conflict() {
    let server = create_test_server();
    server.post("/customers").json(&joao()).await;

    let mut same_email = joao();
    same_email["cpf"] = json!("98765432100");
    same_email["phone"] = json!("11888880000");

    let response = server.post("/customers").json(&same_email).await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
    response.assert_json(&json!({
        "status": 409,
        "message": "Resource conflict",
        "error": ["Customer registration failed due to business rule violation"]
    }));
}

#[tokio::test]
async fn register_losing_a_race_is_conflict() {
    let server = create_server_with(
        Arc::new(InMemoryCustomerRepository::with_stale_checks()),
        None,
    );
    server.post("/customers").json(&joao()).await;

    let response = server.post("/customers").json(&joao()).await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["error"][0],
        "Customer registration failed due to business rule violation"
    );
}

#[tokio::test]
async fn register_with_malformed_json_is_bad_request() {
    let server = create_test_server();

    let response = server
        .post("/customers")
        .content_type("application/json")
        .bytes("{\"name\": \"Ana\",".into())
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Bad request");
    assert!(body["error"][0].is_string());
}

#[tokio::test]
async fn register_with_missing_field_is_bad_request() {
    let server = create_test_server();

    let response = server
        .post("/customers")
        .json(&json!({"name": "Ana", "cpf": "12345678910", "email": "ana@x.com"}))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    let reason = body["error"][0].as_str().expect("reason");
    assert!(reason.contains("phone"), "{reason}");
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let server = create_test_server();
    let mut input = joao();
    input["name"] = json!("a".repeat(MAX_BODY + 1));

    let response = server.post("/customers").json(&input).await;

    response.assert_status(axum::http::StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn storage_failure_is_internal_error() {
    let server = create_server_with(Arc::new(BrokenRepository), None);

    let response = server.post("/customers").json(&joao()).await;

    response.assert_status_internal_server_error();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], 500);
    assert_eq!(body["message"], "Internal server error");
}

// ============ Health Endpoint Tests ============

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn readiness_endpoint_returns_ready_when_healthy() {
    let server = create_test_server();

    let response = server.get("/ready").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["ready"], true);
    assert_eq!(body["database"]["healthy"], true);
}

#[tokio::test]
async fn readiness_endpoint_returns_unavailable_when_database_down() {
    let server = create_server_with(Arc::new(InMemoryCustomerRepository::default()), Some(false));

    let response = server.get("/ready").await;

    response.assert_status_service_unavailable();
    let body: serde_json::Value = response.json();
    assert_eq!(body["ready"], false);
    assert_eq!(body["database"]["healthy"], false);
}

#[tokio::test]
async fn readiness_without_probe_is_ready() {
    let server = create_server_with(Arc::new(InMemoryCustomerRepository::default()), None);

    let response = server.get("/ready").await;

    response.assert_status_ok();
    response.assert_json(&json!({"ready": true}));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let server = create_test_server();

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["paths"]["/customers"]["get"].is_object());
    assert!(body["paths"]["/customers"]["post"].is_object());
}
