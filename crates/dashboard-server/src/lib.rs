//! Dashboard Server
//!
//! A small JSON-over-HTTP CRUD service backed by an in-memory,
//! mutex-guarded dashboard store. State is lost on restart.

pub mod config;
pub mod error;
pub mod handlers;
pub mod id;
pub mod logging;
pub mod storage;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

pub use config::ServerConfig;
pub use error::{ApiError, StoreError};
pub use storage::Store;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Build the router with all dashboard routes and request logging
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::health))
        .route("/dashboard/create", post(handlers::dashboards::create))
        .route("/dashboard/get", get(handlers::dashboards::get))
        .route("/dashboard/update", put(handlers::dashboards::update))
        .route("/dashboard/delete", delete(handlers::dashboards::delete))
        .route("/dashboard/list", get(handlers::dashboards::list))
        .layer(middleware::from_fn(logging::log_request))
        .with_state(state)
}

/// Serve `state` on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
