//! Personal biography site.
//!
//! A single static page rendered from pure view functions and served by an
//! axum shell that routes through an explicit path table.

pub mod api_doc;
pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod views;

use anyhow::Context;
use tokio::net::TcpListener;

use crate::{config::Config, state::AppState};

/// Run the site until Ctrl-C.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let addr = config.bind_address();
    let state = AppState::new(config);
    tracing::info!(
        "Page routes: {:?}",
        state.routes.paths().collect::<Vec<_>>()
    );

    let app = app::create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down gracefully...");
}
