//! JanmaSethu Tools HTTP Server Binary
//!
//! This is the main entry point for the tools REST API server.
//! It loads the configuration and reference tables, sets up the HTTP router,
//! and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin janmasethu-server
//!
//! # Explicit config file
//! JANMASETHU_CONFIG=/etc/janmasethu/janmasethu.toml cargo run --bin janmasethu-server
//! ```
//!
//! # Environment Variables
//!
//! - `JANMASETHU_CONFIG`: Path to the config file (default: search for `janmasethu.toml`)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log filter (default: info)

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use janmasethu_tools::config::ServerConfig;
use janmasethu_tools::http::{create_router, AppState};
use janmasethu_tools::services::SystemClock;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting JanmaSethu tools server");

    let config = ServerConfig::load().context("loading server configuration")?;
    let state = AppState::from_config(&config, Arc::new(SystemClock))?;
    info!(
        offset = %state.reference_offset,
        vaccination_stages = state.vaccination.entries().len(),
        pregnancy_weeks = state.pregnancy_weeks.all().len(),
        "Reference tables loaded"
    );

    let app = create_router(state, &config);

    let addr = config.bind_address()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
