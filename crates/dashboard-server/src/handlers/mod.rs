//! HTTP handlers

pub mod dashboards;
pub mod health;

pub use health::health;
