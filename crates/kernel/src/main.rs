//! Sentiero Navigation Kernel
//!
//! HTTP server and menu registration.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use sentiero_kernel::config::Config;
use sentiero_kernel::state::AppState;
use sentiero_kernel::{menu, routes};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    info!("Starting Sentiero navigation kernel");

    // Load configuration from environment
    let config = Config::from_env().context("failed to load configuration")?;
    info!(port = config.port, "Configuration loaded");

    // Initialize application state (database pool, repositories)
    let state = AppState::new(&config)
        .await
        .context("failed to initialize application state")?;

    info!("Database connection established");

    // Register all persisted menus (skipped while not installed)
    menu::boot(&state)
        .await
        .context("failed to register menus")?;

    // Build the router
    let app = routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind to address")?;

    info!(%addr, "Server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug,sqlx=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
