//! # Plank Store
//!
//! The authoritative in-memory project list, with synchronous observer
//! fan-out on every change.

pub mod project;
pub mod project_store;

// Re-exports
pub use project::*;
pub use project_store::*;
