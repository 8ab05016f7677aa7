//! Ticklist HTTP server.
//!
//! Wires the file-backed store and the web router together from environment
//! configuration and serves until interrupted. All dependency construction
//! happens here, explicitly, at startup.

mod config;

use std::sync::Arc;

use anyhow::Context;
use ticklist_file::FileTodoStore;
use ticklist_web::{build_router, AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ticklist=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        file = %config.storage.file.display(),
        host = %config.server.host,
        port = config.server.port,
        "configuration loaded"
    );

    let store = Arc::new(FileTodoStore::new(&config.storage.file));
    let state = AppState::new(store);
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "ticklist listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            // Without a signal handler there is no way to stop gracefully;
            // log it and serve until the process is killed.
            tracing::error!(error = %e, "failed to install ctrl-c handler");
            std::future::pending::<()>().await;
        }
    }
}
