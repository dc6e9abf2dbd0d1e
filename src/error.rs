//! Error types for nib.
//!
//! The texture kernel itself never fails. These errors come from option
//! validation, document I/O, and document consistency checks.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`NibError`].
pub type Result<T> = std::result::Result<T, NibError>;

/// Errors that can occur outside the per-stroke kernel.
#[derive(Error, Debug)]
pub enum NibError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error loading a document from file.
    #[error("failed to load document from {path}: {message}")]
    LoadError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Error saving a document to file.
    #[error("failed to save document to {path}: {message}")]
    SaveError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },

    /// The document is structurally inconsistent.
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },
}

impl NibError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        NibError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_message() {
        let err = NibError::invalid_param("uv_scale", f64::NAN, "must be finite");
        assert_eq!(
            err.to_string(),
            "invalid parameter: uv_scale = NaN (must be finite)"
        );
    }
}
