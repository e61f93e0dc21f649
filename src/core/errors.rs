//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for namefix operations
#[derive(Debug, Error)]
pub enum Error {
    /// Canonical-name document is not valid JSON
    #[error("Parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Canonical-name document is valid JSON but has the wrong shape
    #[error("Format error in {path}: {message}")]
    Format { path: PathBuf, message: String },

    /// The canonical name list is empty, so no match can exist
    #[error("Canonical name list is empty; nothing to match against")]
    NoCandidates,

    /// Per-file filesystem rename failure
    #[error("Failed to rename {from} to {to}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a parse error with path context
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a format error with path context
    pub fn format(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Format {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
