//! # Plank Shared
//!
//! Common types and interfaces used across all Plank packages.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;
