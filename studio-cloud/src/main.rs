//! studio-cloud — multi-tenant management backend for service studios
//!
//! Long-running service that:
//! - Hosts bookings, clients, catalog, sales and inventory per tenant
//! - Enforces tenant isolation on every data access path
//! - Detects scheduling conflicts on each professional's timeline

mod api;
mod auth;
mod core;
mod db;
mod utils;

use crate::core::{Config, ServerState};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studio_cloud=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting studio-cloud (env: {})", config.environment);

    let state = ServerState::initialize(&config).await?;
    let addr = format!("0.0.0.0:{}", state.config.http_port);
    let app = api::create_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("studio-cloud listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        })
        .await?;

    Ok(())
}
