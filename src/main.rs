mod config;
mod dto;
mod handlers;
mod models;
mod repository;
mod service;

use std::sync::Arc;

use repository::Repository;
use service::NoteService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log setup
    tracing_subscriber::fmt::init();

    // Load config
    let cfg = config::load_config().inspect_err(|e| {
        tracing::error!("Failed to load configuration: {e}");
    })?;
    tracing::info!("Successfully loaded note service config");

    // Repository creation and migration
    let mut repo = Repository::new(&cfg.database_url).await.inspect_err(|e| {
        tracing::error!("Failed to establish database connection: {e}");
    })?;
    tracing::info!("Connected to database");

    repo.migrate().await.inspect_err(|e| {
        tracing::error!("Failed to migrate database: {e}");
    })?;

    // Service creation
    let service = Arc::new(NoteService::new(Arc::new(repo), cfg.store_timeout));

    // Router config
    let router = handlers::router(service);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", cfg.port))
        .await
        .inspect_err(|e| {
            tracing::error!("Failed to bind port {}: {e}", cfg.port);
        })?;

    // Starting router
    tracing::info!("REST server listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await.inspect_err(|e| {
        tracing::error!("HTTP server error: {e}");
    })?;

    Ok(())
}
