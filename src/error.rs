//! Error types for `estante`.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for shelf operations.
#[derive(Error, Debug)]
pub enum EstanteError {
    // === Format Errors ===
    /// Unknown backup format string.
    #[error("Invalid backup format: '{format}'. Use 'json' or 'binary'")]
    InvalidFormat { format: String },

    /// Failed to parse a line in a delimited text file.
    #[error("Text parse error at line {line}: {reason}")]
    TextParse { line: usize, reason: String },

    /// Binary snapshot is malformed, truncated, or from an unknown version.
    #[error("Binary decode error: {reason}")]
    BinaryDecode { reason: String },

    // === Storage Errors ===
    /// File not found at the specified path.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization/deserialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl EstanteError {
    #[must_use]
    pub fn text_parse(line: usize, reason: impl Into<String>) -> Self {
        Self::TextParse {
            line,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn binary_decode(reason: impl Into<String>) -> Self {
        Self::BinaryDecode {
            reason: reason.into(),
        }
    }
}

/// Result type using `EstanteError`.
pub type Result<T> = std::result::Result<T, EstanteError>;
