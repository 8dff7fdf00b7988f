//! SpaceX launch dashboard server binary
//!
//! Loads the launch CSV once, builds the dashboard layout and bindings, and
//! serves the page plus its JSON endpoints.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin spacex-dash-server
//!
//! # Explicit data file and port
//! DASH_DATA=data/spacex_launch_dash.csv PORT=9000 cargo run --bin spacex-dash-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8050)
//! - `DASH_DEBUG`: Enable debug logging (default: false)
//! - `DASH_DATA`: Path to the launch CSV
//! - `DASH_CONFIG`: Path to `dashboard.toml`
//! - `RUST_LOG`: Log level (overrides `DASH_DEBUG`)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use spacex_dash::dashboard::DashboardContext;
use spacex_dash::data::DashboardConfig;
use spacex_dash::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = DashboardConfig::default_location();
    let config = DashboardConfig::from_default_location()
        .context("Failed to load dashboard configuration")?
        .apply_env_overrides();
    config.validate()?;

    let default_level = if config.server.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default_level),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting SpaceX launch dashboard");
    match &config_path {
        Some(path) => info!("Using configuration from {}", path.display()),
        None => info!("No dashboard.toml found, using defaults"),
    }

    let data_path = config.resolve_data_path();
    let context = DashboardContext::load(config.clone())
        .with_context(|| format!("Failed to load launch data from {}", data_path.display()))?;
    info!(
        "Loaded {} launch records (checksum {})",
        context.table.len(),
        context.table.checksum()
    );

    let state = AppState::new(Arc::new(context));
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Dashboard listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
