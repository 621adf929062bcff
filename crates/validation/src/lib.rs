//! # Plank Validation
//!
//! Stateless field-constraint evaluation for form input.

pub mod engine;

// Re-exports
pub use engine::*;
