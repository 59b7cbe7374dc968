//! Period Sync - API Server Binary
//!
//! This binary starts the HTTP server exposing the period synchronizer.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin period-sync
//!
//! # Run with environment variables
//! PERIOD_SYNC_PORT=9000 PERIOD_SYNC_LOG_FORMAT=json cargo run --bin period-sync
//! ```
//!
//! # Environment Variables
//!
//! * `PERIOD_SYNC_HOST` - Server host (default: 0.0.0.0)
//! * `PERIOD_SYNC_PORT` - Server port (default: 8080)
//! * `PERIOD_SYNC_LOG_LEVEL` - Log level or filter directive (default: info)
//! * `PERIOD_SYNC_LOG_FORMAT` - `text` or `json` (default: text)
//! * `PERIOD_SYNC_DEFAULT_TIMEZONE` - Timezone for filters without one (default: UTC)
//! * `PERIOD_SYNC_DEFAULT_LOCALE` - Locale for filters without one (default: en)
//! * `RUST_LOG` - Overrides the log level when set

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use core_kernel::SystemClock;
use interface_api::config::{ApiConfig, LogFormat};
use interface_api::{create_router, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration and reference data, and starts
/// the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Embedded locale data or documents cannot be parsed
/// - The configured address is invalid
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();
    init_tracing(&config.log_level, config.log_format);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        default_timezone = %config.default_timezone,
        default_locale = %config.default_locale,
        "Starting period sync server"
    );

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;
    let state = AppState::new(config, Arc::new(SystemClock)).context("failed to build state")?;
    let app = create_router(state);

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads configuration from the environment, falling back to defaults
/// when it cannot be read.
fn load_config() -> ApiConfig {
    match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration ({e}), using defaults");
            ApiConfig::default()
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
/// * `format` - Human-readable text or one JSON object per line
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let json = format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_target(true)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_target(true)))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// In-flight requests complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
