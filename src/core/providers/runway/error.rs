//! Runway error types

use serde_json::Value;
use thiserror::Error;

/// Submission message used when the provider answered without a task id
pub const MISSING_TASK_ID: &str = "Provider did not return a task ID";

/// Generation task failures
///
/// Provider payloads are kept as received so callers can log or relay the
/// exact diagnostic. Nothing here is retried.
#[derive(Error, Debug)]
pub enum MediaTaskError {
    /// Job creation failed or the provider returned no task id
    #[error("Provider submission failed: {message}")]
    ProviderSubmission {
        message: String,
        payload: Option<Value>,
    },

    /// Status read failed or the provider response was malformed
    ///
    /// "Task not found" is not told apart from other failures.
    #[error("Provider query for task {task_id} failed: {message}")]
    ProviderQuery {
        task_id: String,
        message: String,
        payload: Option<Value>,
    },

    /// The call was rejected before anything was sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl MediaTaskError {
    pub fn submission(message: impl Into<String>, payload: Option<Value>) -> Self {
        Self::ProviderSubmission {
            message: message.into(),
            payload,
        }
    }

    pub fn query(task_id: &str, message: impl Into<String>, payload: Option<Value>) -> Self {
        Self::ProviderQuery {
            task_id: task_id.to_string(),
            message: message.into(),
            payload,
        }
    }

    /// Raw provider payload attached to the failure, if any
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::ProviderSubmission { payload, .. } | Self::ProviderQuery { payload, .. } => {
                payload.as_ref()
            }
            Self::InvalidRequest(_) => None,
        }
    }

    pub fn is_missing_task_id(&self) -> bool {
        matches!(self, Self::ProviderSubmission { message, .. } if message == MISSING_TASK_ID)
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            Self::ProviderSubmission { .. } => "provider_submission",
            Self::ProviderQuery { .. } => "provider_query",
            Self::InvalidRequest(_) => "invalid_request",
        }
    }
}
