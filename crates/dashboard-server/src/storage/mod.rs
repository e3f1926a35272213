//! Storage layer
//!
//! State lives only in process memory and is lost on restart.

pub mod memory;

pub use memory::{Store, DEFAULT_PAGE_SIZE};
