//! Unified error types for supsub.
//!
//! The conversion engine itself never fails. These errors cover the surfaces
//! around it: parsing policy and style names, loading options, and CLI I/O.
use thiserror::Error;

/// Main error type for supsub operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown unmapped-character policy name
    #[error("Invalid unmapped policy '{0}': expected one of keep, omit, placeholder")]
    InvalidPolicy(String),

    /// Unknown script style name
    #[error("Invalid script style '{0}': expected superscript or subscript")]
    InvalidStyle(String),

    /// Conversion options could not be deserialized
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(String),
}

/// Result type for supsub operations.
pub type Result<T> = std::result::Result<T, Error>;
