//! Error types for the Msone dictionary server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The query engine itself is total and never returns these; they cover the
//! configuration and dataset-loading boundaries.

use thiserror::Error;

/// Errors that can occur while loading the dictionary dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Dataset file could not be opened or read
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV content could not be parsed
    #[error("CSV parse error: {0}")]
    CsvError(#[from] csv::Error),

    /// JSON content could not be parsed
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A required column is absent from the header
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// The file extension is not a supported dataset format
    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with DatasetError
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
