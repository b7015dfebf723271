//! Blockchain Project Tracker
//!
//! An HTTP JSON service tracking blockchain projects and wallet
//! transactions, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────┐
//!                    │              CHAIN TRACKER                  │
//!                    │                                             │
//!   Client Request   │  ┌─────────┐    ┌──────────────────────┐   │
//!   ─────────────────┼─▶│  http   │───▶│  projects / wallets  │   │
//!                    │  │ server  │    │       handlers       │   │
//!                    │  └─────────┘    └──────────┬───────────┘   │
//!                    │                            │               │
//!                    │                 ┌──────────▼───────────┐   │
//!                    │                 │      validation      │   │
//!                    │                 │ (address, filtering) │   │
//!                    │                 └──────────┬───────────┘   │
//!                    │                            │               │
//!   Client Response  │  ┌─────────┐    ┌──────────▼───────────┐   │
//!   ◀────────────────┼──│envelope │◀───│     MockStore        │   │
//!                    │  │  + err  │    │ (projects, wallets,  │   │
//!                    │  └─────────┘    │    transactions)     │   │
//!                    │                 └──────────────────────┘   │
//!                    │                                             │
//!                    │  Cross-cutting: config, observability,      │
//!                    │  lifecycle (graceful shutdown)              │
//!                    └────────────────────────────────────────────┘
//! ```

use std::path::Path;
use std::sync::Arc;

use chain_tracker::config::TrackerConfig;
use chain_tracker::http::HttpServer;
use chain_tracker::lifecycle::Shutdown;
use chain_tracker::store::{MockStore, SeedData};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chain_tracker=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("chain-tracker v{} starting", env!("CARGO_PKG_VERSION"));

    // Load configuration (defaults when no config file is given)
    let config = match std::env::var("TRACKER_CONFIG") {
        Ok(path) => chain_tracker::config::load_config(Path::new(&path))?,
        Err(_) => TrackerConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Seed the store
    let seed = match &config.seed.path {
        Some(path) => SeedData::from_file(Path::new(path))?,
        None => SeedData::builtin(),
    };
    let store = Arc::new(MockStore::new(seed));

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Initialize metrics exporter
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            chain_tracker::observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Create and run HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, store);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
