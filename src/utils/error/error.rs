//! Error handling for the relay
//!
//! This module defines the crate-level error type and its HTTP mapping.

#![allow(missing_docs)]

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

/// Result type alias for the relay
pub type Result<T> = std::result::Result<T, RelayError>;

/// Main error type for the relay
#[derive(Error, Debug)]
pub enum RelayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Request rejected before any provider call
    #[error("{0}")]
    BadRequest(String),

    /// A provider call failed; the message is the caller-facing one
    #[error("{0}")]
    Upstream(String),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),
}

impl RelayError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::Server(message.into())
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            RelayError::BadRequest(_) | RelayError::Upstream(_) => self.to_string(),
            _ => "An internal error occurred".to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse { error: message })
    }
}

/// Error body returned to the frontend
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
