//! Error types for table generation.

use ft_core::CoreError;
use ft_webbook::WebBookError;
use std::path::PathBuf;

/// Table generation error. Every variant aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unsupported component '{name}' (expected 'H2O' or 'CO2')")]
    UnsupportedComponent { name: String },

    #[error("Network error for isotherm T = {temperature_c} °C: {message}")]
    Network { temperature_c: f64, message: String },

    #[error("Malformed response for isotherm T = {temperature_c} °C: {reason}")]
    MalformedResponse { temperature_c: f64, reason: String },

    #[error("Failed to load configuration file {path}: {message}")]
    ConfigFile { path: PathBuf, message: String },

    #[error("Failed to write table file: {path}")]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Worker pool error: {0}")]
    WorkerPool(String),
}

/// Result type for ft-table operations.
pub type TableResult<T> = Result<T, TableError>;

impl TableError {
    /// Attach the isotherm temperature to a service error.
    pub fn at_isotherm(err: WebBookError, temperature_c: f64) -> Self {
        match err {
            WebBookError::UnsupportedComponent { name } => TableError::UnsupportedComponent { name },
            WebBookError::MalformedResponse { reason } => TableError::MalformedResponse {
                temperature_c,
                reason,
            },
            WebBookError::Network { message } => TableError::Network {
                temperature_c,
                message,
            },
            WebBookError::HttpStatus { status } => TableError::Network {
                temperature_c,
                message: format!("service returned HTTP status {}", status),
            },
        }
    }
}

impl From<CoreError> for TableError {
    fn from(err: CoreError) -> Self {
        TableError::Configuration(err.to_string())
    }
}

impl From<WebBookError> for TableError {
    fn from(err: WebBookError) -> Self {
        match err {
            WebBookError::UnsupportedComponent { name } => TableError::UnsupportedComponent { name },
            other => TableError::Configuration(other.to_string()),
        }
    }
}
