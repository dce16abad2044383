//! Error types for Address Bloc.
//!
//! Searches never fail (a miss is `None`), and adding, removing or clearing
//! entries is infallible, so the only errors come from importing and from
//! loading configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while importing entries from a delimited source.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The source file could not be opened
    #[error("Failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the input
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// A row did not carry exactly name, phone number and email
    #[error("Malformed row at line {line}: expected 3 fields, found {fields}")]
    Malformed { line: u64, fields: usize },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ImportError
pub type ImportResult<T> = Result<T, ImportError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
