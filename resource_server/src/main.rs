//! Resource server: loads config from the environment, opens the SQLite store,
//! and serves the resource routes.
//!
//! Run from repo root: `cargo run -p resource-server`

use resource_service::{app, AppState, ServerConfig, Store};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("resource_service=info,resource_server=info,tower_http=info")
            }),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let store = Store::connect(&config).await?;
    let state = AppState::new(store.clone());
    let router = app(state, config.body_limit_bytes);

    let listener = TcpListener::bind(config.socket_addr()).await?;
    tracing::info!("Server running at http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
