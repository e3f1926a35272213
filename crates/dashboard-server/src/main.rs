//! Dashboard server binary

use anyhow::{Context, Result};
use dashboard_server::{logging, AppState, ServerConfig, Store};
use std::net::SocketAddr;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[FATAL] Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init(config.log_format) {
        eprintln!("[FATAL] {:#}", e);
        std::process::exit(1);
    }

    info!("Starting dashboard server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server(config).await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server(config: ServerConfig) -> Result<()> {
    let store = Store::with_page_size(config.page_size);
    info!("Config loaded: bind={}, page_size={}", config.bind_address, store.page_size());

    let state = AppState::new(store);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server started at {}", addr);
    dashboard_server::serve(listener, state, shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
