//! Error types for the key-value server
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

// == KV Error Enum ==
/// Errors surfaced to HTTP clients.
///
/// The `Display` text of each variant is the exact plain-text response body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KvError {
    /// The `key` path parameter was missing or empty
    #[error("key is required")]
    KeyRequired,

    /// The `key` or `value` path parameter was missing or empty
    #[error("key/value is required")]
    KeyValueRequired,

    /// No value is stored under the requested key
    #[error("value not found")]
    ValueNotFound,

    /// A path segment was present but could not be extracted
    #[error("{message}")]
    InvalidPath {
        /// Status chosen by the extractor's rejection
        status: StatusCode,
        /// Rejection body text
        message: String,
    },
}

impl From<PathRejection> for KvError {
    fn from(rejection: PathRejection) -> Self {
        KvError::InvalidPath {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl KvError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            KvError::KeyRequired | KvError::KeyValueRequired | KvError::ValueNotFound => {
                StatusCode::BAD_REQUEST
            }
            KvError::InvalidPath { status, .. } => *status,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for KvError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

// == Config Error Enum ==
/// Errors raised while loading configuration at startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),

    /// `HOST` is set but is not a valid IP address
    #[error("invalid HOST value: {0:?}")]
    InvalidHost(String),
}

// == Result Type Alias ==
/// Convenience Result type for request handlers.
pub type Result<T> = std::result::Result<T, KvError>;
