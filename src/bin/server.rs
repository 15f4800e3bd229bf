//! Inventory server: reads settings from the environment (and `.env`), serves the
//! House/Room/Device API over the JSON documents in the data directory.

use home_inventory::{app, config::DEFAULT_LOG_FILTER, AppState, JsonFileStorage, Settings};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let settings = Settings::from_env()?;
    let storage = JsonFileStorage::from_settings(&settings);
    tracing::info!(
        houses = %storage.houses_path().display(),
        rooms = %storage.rooms_path().display(),
        devices = %storage.devices_path().display(),
        "using collection documents"
    );
    let state = AppState::new(Arc::new(storage));

    let listener = TcpListener::bind(settings.bind).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state, settings.body_limit))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
