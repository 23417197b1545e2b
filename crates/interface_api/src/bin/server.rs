//! Quote API Server Binary
//!
//! This binary starts the HTTP API server for quote validation and quote
//! image rendering.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin quote-api
//!
//! # Run with environment variables
//! API_PORT=9000 API_SETTLE_DELAY_MS=0 cargo run --bin quote-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_FONT_REGULAR`, `API_FONT_BOLD`, `API_FONT_ITALIC` - TrueType files
//!   used for quote images (default: DejaVu Sans)
//! * `API_SETTLE_DELAY_MS` - Pause between painting and capture (default: 300)
//! * `API_OUTPUT_DIR` - Keep a copy of every generated image here (optional)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use infra_render::{FontPainter, TextPainter};
use interface_api::{create_router, config::ApiConfig, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration and fonts, and starts the HTTP
/// server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid API_* configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        settle_delay_ms = config.settle_delay_ms,
        "Starting Quote API Server"
    );

    let painter = load_painter(&config);
    let app = create_router(AppState::new(config.clone(), painter));

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads the configured fonts.
///
/// The server still starts without them: validation keeps working, image
/// requests fail and the readiness check reports unavailable.
fn load_painter(config: &ApiConfig) -> Option<Arc<dyn TextPainter>> {
    match FontPainter::load(&config.font_sources()) {
        Ok(painter) => Some(Arc::new(painter)),
        Err(e) => {
            tracing::warn!(error = %e, "Fonts not loaded, quote images are disabled");
            None
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
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
