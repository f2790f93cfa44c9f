//! GDAP Portal server binary.

use gdap_portal_server::{AppState, PortalConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get configuration from environment
    let config = PortalConfig::from_env()?;
    let addr = config.socket_addr()?;

    tracing::info!(
        api_url = %config.api_url,
        locked_template = config.role_template_lock.as_deref().unwrap_or(""),
        "Starting GDAP Portal v{}",
        env!("CARGO_PKG_VERSION")
    );

    gdap_portal_server::run_server(addr, AppState::from_config(&config)).await?;

    Ok(())
}
