//! Response normalization
//!
//! Turns the free-form text a completion provider returned into a
//! [`CompletionResult`]. Never fails: anything that is not a single JSON
//! object is kept as raw text, and missing text becomes an error result.

use crate::core::types::CompletionResult;
use serde_json::Value;
use tracing::debug;

/// Classify provider text as structured, fallback or error
///
/// - `None` or `""` → `{ok: false, error: "no response from model"}`
/// - a single JSON object → that object, untouched
/// - anything else → `{ok: true, raw: <text>}`
///
/// JSON that parses but is not an object (an array, a bare string or number)
/// is kept as raw text as well.
pub fn normalize(raw: Option<&str>) -> CompletionResult {
    let text = match raw {
        Some(text) if !text.is_empty() => text,
        _ => return CompletionResult::no_response(),
    };

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(fields)) => CompletionResult::Structured(fields),
        Ok(other) => {
            debug!(kind = json_kind(&other), "Model returned JSON that is not an object");
            CompletionResult::fallback(text)
        }
        Err(e) => {
            debug!(error = %e, "Model output is not strict JSON, keeping raw text");
            CompletionResult::fallback(text)
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
