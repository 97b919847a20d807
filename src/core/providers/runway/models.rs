//! Runway wire types

use serde::Serialize;
use serde_json::Value;

/// Create-task request body: the fixed model selector plus the caller's parameters
#[derive(Debug, Serialize)]
pub(crate) struct CreateTaskRequest<'a, P: Serialize> {
    pub(crate) model: &'a str,
    #[serde(flatten)]
    pub(crate) params: &'a P,
}

/// Pull the task id out of a create-task response
///
/// An empty string counts as missing.
pub(crate) fn extract_task_id(response: &Value) -> Option<&str> {
    response
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.trim().is_empty())
}
