//! Dashboard Types - Wire types for the dashboard service
//!
//! This crate contains only pure data types with no runtime dependencies,
//! shared by the server and the HTTP client.

pub mod dashboard;

pub use dashboard::*;
