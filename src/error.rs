//! Error types for state handling.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for state, save and load operations.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse snapshot: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Document rendering failed: {0}")]
    Render(String),

    #[error("Section does not match the current schema: {0}")]
    Schema(String),

    #[error("Invalid file name: {0:?}")]
    InvalidFileName(PathBuf),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl From<serde_json::Error> for StateError {
    fn from(e: serde_json::Error) -> Self {
        StateError::Serialization(e.to_string())
    }
}

/// Result type for state operations.
pub type Result<T> = std::result::Result<T, StateError>;
