//! Error types for Plank

use thiserror::Error;

/// Error thrown when a form submission fails field validation
#[derive(Debug, Error)]
#[error("Invalid input, please try again. Failing fields: {}", fields.join(", "))]
pub struct InvalidSubmissionError {
    pub fields: Vec<String>,
}

/// Error thrown when a field name does not exist on the board form
#[derive(Debug, Error)]
#[error("Field '{field}' not found. Known fields: {}", known_fields.join(", "))]
pub struct UnknownFieldError {
    pub field: String,
    pub known_fields: Vec<String>,
}

/// General Plank error type
#[derive(Debug, Error)]
pub enum PlankError {
    #[error(transparent)]
    InvalidSubmission(#[from] InvalidSubmissionError),

    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PlankError>;
