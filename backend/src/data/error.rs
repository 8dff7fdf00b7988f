//! Error types for loading the launch table and dashboard configuration.

use std::path::PathBuf;

/// Result type for launch table loading
pub type LoadResult<T> = Result<T, LoadError>;

/// Error type for loading the launch CSV.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The configured file does not exist.
    #[error("Launch data file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read or parsed as CSV.
    #[error("Failed to read launch data from {}: {message}", path.display())]
    Unreadable { path: PathBuf, message: String },

    /// A required column is absent from the header.
    #[error("Launch data is missing required column '{column}'")]
    MissingColumn { column: String },

    /// A cell holds a null or out-of-domain value.
    #[error("Invalid value in column '{column}' at row {row}: {message}")]
    InvalidValue {
        column: String,
        row: usize,
        message: String,
    },
}

impl LoadError {
    pub fn missing_column(column: impl Into<String>) -> Self {
        LoadError::MissingColumn {
            column: column.into(),
        }
    }

    pub fn invalid_value(column: impl Into<String>, row: usize, message: impl Into<String>) -> Self {
        LoadError::InvalidValue {
            column: column.into(),
            row,
            message: message.into(),
        }
    }
}

/// Error type for reading `dashboard.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
