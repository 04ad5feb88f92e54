//! Error types for the Vitae library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Vitae operations.
#[derive(Debug, Error)]
pub enum VitaeError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Résumé file extension is not one of the recognized formats.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The document library could not read the file at all.
    #[error("Failed to parse document '{path}': {message}")]
    DocumentParse { path: PathBuf, message: String },

    /// Configuration error (malformed overlay, missing required section).
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Vitae operations.
pub type Result<T> = std::result::Result<T, VitaeError>;
