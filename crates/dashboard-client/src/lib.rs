//! Dashboard Client
//!
//! Typed HTTP client for the dashboard server plus a resource provider that
//! maps platform CRUD operations onto it.

pub mod client;
pub mod error;
pub mod provider;

pub use client::{Client, DEFAULT_BASE_URL};
pub use error::{ClientError, Result};
pub use provider::{DashboardProvider, HealthCheck, HealthStatus, Resource, ResourcePage};
