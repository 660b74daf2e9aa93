//! Error types for notebook conversion.

use std::path::PathBuf;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading, converting or writing notebooks.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to read the notebook file.
    #[error("Failed to read file {path}: {message}")]
    Read { path: PathBuf, message: String },

    /// Failed to write the converted document.
    #[error("Failed to write file {path}: {message}")]
    Write { path: PathBuf, message: String },

    /// Notebook JSON did not match the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Notebook parsed but is not a format we can convert.
    #[error("Invalid notebook: {0}")]
    InvalidNotebook(String),
}
