//! Customer registry HTTP server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::CustomerService;
use infrastructure::{
    AppConfig, AsyncDatabase, SqlxCustomerRepository, SqlxDatabaseHealth, init_logging,
};
use presentation_http::{AppState, create_router, set_expose_internal_errors};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration decides the log format, so load it before logging is up
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_logging(&config.server.log_format)?;

    info!(
        "👥 Customer registry v{} starting...",
        env!("CARGO_PKG_VERSION")
    );
    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {}", e);
    }

    info!(
        environment = %config.environment,
        host = %config.server.host,
        port = %config.server.port,
        database = %config.database.url,
        "Configuration loaded"
    );

    set_expose_internal_errors(config.expose_internal_errors());

    // Open the database
    let database = AsyncDatabase::new(&config.database).await?;
    if config.database.run_migrations {
        database.migrate().await?;
    }

    // Wire repository -> service -> state
    let repository = Arc::new(SqlxCustomerRepository::new(database.pool().clone()));
    let customer_service = Arc::new(CustomerService::new(repository));
    let state = AppState::new(customer_service).with_database_health(Arc::new(
        SqlxDatabaseHealth::new(database.pool().clone()),
    ));

    let app = create_router(state, config.server.max_body_size_bytes);

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);
    info!("📚 API docs: http://{}/api-docs/openapi.json", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    if tokio::time::timeout(shutdown_timeout, database.close())
        .await
        .is_err()
    {
        warn!("Database pool did not close within {:?}", shutdown_timeout);
    }

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
}
