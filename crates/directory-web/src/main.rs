//! Web server for the employee directory
#![forbid(unsafe_code)]

use directory_core::{Config, Error, Result, init_logging};
use directory_web::{AppState, build_app_with_state, spawn_session_sweeper};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (for development convenience)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: .env file not loaded: {e}");
    }

    let loaded = Config::load();
    let config = loaded.as_ref().map_or_else(|_| Config::default(), Clone::clone);
    init_logging(&config.logging)?;
    if let Err(e) = loaded {
        warn!("Failed to load config ({}), using defaults", e);
    }

    let host: IpAddr = config.server.host.parse().map_err(|e| Error::Configuration {
        message: format!("Invalid web server host '{}': {e}", config.server.host),
    })?;
    let addr = SocketAddr::new(host, config.server.port);

    info!(
        "Starting employee directory v{} on {} (remote API {})",
        env!("CARGO_PKG_VERSION"),
        addr,
        config.remote_api.base_url
    );

    let state = Arc::new(AppState::new(config)?);
    let sweeper = spawn_session_sweeper(Arc::clone(&state));
    let app = build_app_with_state(state);
    let listener = TcpListener::bind(&addr).await?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    info!("Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
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
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received terminate signal, shutting down gracefully...");
        },
    }
}
