//! # Plank CLI
//!
//! Command-line interface for the Plank project board.

pub mod commands;
pub mod form;
pub mod interactive;
pub mod views;
