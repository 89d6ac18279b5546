//! Uranai server binary
//!
//! HTTP API for birth-date divination readings.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uranai_server::api::{build_router, AppState};
use uranai_server::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uranai_server=info,uranai=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    tracing::info!("Starting Uranai server");
    tracing::info!("  API: http://{}", config.api_addr);
    tracing::info!("  Persona: {}", config.persona);
    tracing::info!(
        "  AI: {}",
        if config.ai.is_some() { "enabled" } else { "disabled (fallback readings)" }
    );

    let addr = config.api_addr;
    let state = Arc::new(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, build_router(state)).await?;

    Ok(())
}
