//! WebBook access errors.

use thiserror::Error;

/// Result type for WebBook operations.
pub type WebBookResult<T> = Result<T, WebBookError>;

/// Errors that can occur while building, sending or decoding isotherm queries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WebBookError {
    /// Component name without a known chemical identifier.
    #[error("Unsupported component '{name}' (expected 'H2O' or 'CO2')")]
    UnsupportedComponent { name: String },

    /// Response body could not be decoded into the expected columns.
    #[error("Malformed response: {reason}")]
    MalformedResponse { reason: String },

    /// Transport failure (connection, TLS, timeout, body read).
    #[error("Network error: {message}")]
    Network { message: String },

    /// Service answered with a non-success status code.
    #[error("Service returned HTTP status {status}")]
    HttpStatus { status: u16 },
}

impl WebBookError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        WebBookError::MalformedResponse {
            reason: reason.into(),
        }
    }
}
