//! Main entry point for the City Data Intelligence backend.
//!
//! This file loads configuration, initializes logging, validates every page
//! target, and starts the Axum server. A page target that cannot be resolved
//! stops startup.

use anyhow::Context;
use backend::app::{build_router, build_state};
use backend::auth::spawn_sweeper;
use backend::config::AppConfig;
use backend::logging::init_logging;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env_or_yaml()?;
    init_logging(&config.log_level, config.log_format)?;

    let state = build_state(&config)?;
    let sweeper = spawn_sweeper(
        state.sessions.clone(),
        (config.session_idle_ttl / 4).max(Duration::from_secs(1)),
    );
    let app = build_router(state);

    let addr = config.bind_addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!(%addr, pages_dir = %config.pages_dir.display(), "listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await?;
    sweeper.abort();
    Ok(())
}
