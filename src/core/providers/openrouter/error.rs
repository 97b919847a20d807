//! OpenRouter error types

use serde_json::Value;
use thiserror::Error;

use crate::core::providers::shared::body_payload;

/// Transport-level completion failures
///
/// These never leave the client: they are folded into
/// `CompletionResult::Error` before `complete` returns.
#[derive(Error, Debug)]
pub enum CompletionTransportError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success status from the provider
    #[error("API error (status {status_code}): {body}")]
    Api { status_code: u16, body: String },
}

impl CompletionTransportError {
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::Network(_) => "network",
            Self::Api { .. } => "api_error",
        }
    }

    /// Detail relayed in the `error` field of the failed result
    ///
    /// The provider body is preferred, parsed as JSON when it is JSON.
    pub fn detail(&self) -> Value {
        match self {
            Self::Api { status_code, body } => body_payload(body)
                .unwrap_or_else(|| Value::String(format!("HTTP {}", status_code))),
            other => Value::String(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for CompletionTransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
