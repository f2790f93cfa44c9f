//! GDAP Portal Server - HTTP edge service
//!
//! Serves the single-page invite UI and proxies the role template and
//! invite calls to the management API with a cached bearer token.

pub mod config;
pub mod error;
pub mod handlers;
pub mod page;
pub mod router;
pub mod state;

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

pub use config::{ConfigError, PortalConfig};
pub use router::build_router;
pub use state::AppState;

/// Binds `addr` and serves until Ctrl-C.
///
/// # Errors
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn run_server(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
