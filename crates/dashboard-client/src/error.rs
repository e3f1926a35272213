//! Error types for the dashboard client

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Dashboard not found: {0}")]
    NotFound(String),

    #[error("Dashboard {operation} failed, status: {status}")]
    UnexpectedStatus {
        operation: &'static str,
        status: StatusCode,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }
}
