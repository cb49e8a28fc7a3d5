//! HTTP entry point for the receipt processor.
//!
//! Configuration is read from `$RECEIPT_PROCESSOR_CONFIG` (default
//! `data/config.toml`); see `receipt_processor::config` for the overrides.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use receipt_processor::{
    config,
    error::Result,
    http,
    models::{Config, LoggingConfig},
    services::build_receipt_service,
};

/// Initialize tracing; `RUST_LOG` takes precedence over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.to_lowercase()));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

async fn serve(config: Config) -> Result<()> {
    let addr = config.server.socket_addr()?;
    let grace = Duration::from_secs(config.server.shutdown_grace_secs);

    let service = Arc::new(build_receipt_service(&config));
    let router = http::router(service);

    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!(bind = %local_addr, "Receipt processor listening");

    let server = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .into_future();

    // In-flight requests get `grace` to finish once the signal arrives.
    tokio::select! {
        result = server => result?,
        _ = async {
            shutdown_signal().await;
            tokio::time::sleep(grace).await;
        } => warn!("Graceful shutdown timed out after {:?}", grace),
    }

    info!("Receipt processor stopped");
    Ok(())
}

/// Main entry point for the HTTP server.
#[tokio::main]
async fn main() -> Result<()> {
    let config_path = config::config_path();
    let config = config::load_config(&config_path)?;
    init_tracing(&config.logging);

    info!(config = %config_path.display(), "Receipt processor starting...");
    serve(config).await
}
