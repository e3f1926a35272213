//! Tracing setup and per-request logging

use crate::config::LogFormat;
use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init(format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.with_target(false).try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

/// Emit one line per inbound request with its path and query parameters
pub async fn log_request(request: Request, next: Next) -> Response {
    let uri = request.uri();
    info!(
        path = %uri.path(),
        params = %uri.query().unwrap_or_default(),
        "Request received"
    );
    next.run(request).await
}
