//! Airsense - A lightweight ingestion and query API for environmental
//! sensor readings
//!
//! Accepts particulate/gas/climate readings over HTTP and serves
//! time-windowed queries plus a sensor-registry listing.

mod api;
mod config;
mod error;
mod models;
mod store;

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use config::Config;
use models::SensorRecord;

/// Main entry point for the Airsense API server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the readings table and sensor registry
/// 4. Seed the registry from SENSORS_FILE when configured
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "airsense=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Airsense API Server");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, query_window={}s, scan_page_size={}",
        config.server_port, config.query_window_secs, config.scan_page_size
    );

    // Create application state with the store tables
    let state = AppState::from_config(&config);
    info!("Store initialized");

    // Registry lifecycle is external; the seed file is the only local source
    if let Some(path) = &config.sensors_file {
        let count = seed_registry(&state, path)
            .await
            .with_context(|| format!("failed to load sensor registry from {path}"))?;
        info!("Sensor registry seeded: {} records from {}", count, path);
    }

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Loads registry records from a JSON seed file into the shared state.
///
/// The file holds an array of records in the registry's attribute naming
/// (`DeviceId`, `DeviceName`, `Lat`, `Lon`).
async fn seed_registry(state: &AppState, path: &str) -> anyhow::Result<usize> {
    let raw = tokio::fs::read_to_string(path).await?;
    let records: Vec<SensorRecord> = serde_json::from_str(&raw)?;

    let mut registry = state.sensors.write().await;
    let count = records.len();
    for record in records {
        registry.insert(record);
    }
    Ok(count)
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
