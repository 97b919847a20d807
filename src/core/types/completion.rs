//! Completion result type

use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

/// Message used when the provider returned no textual content
pub const NO_RESPONSE_ERROR: &str = "no response from model";

/// Outcome of one text-completion call
///
/// Exactly one of the three shapes is produced per call:
///
/// - `Structured`: the provider honoured the one-JSON-object contract and the
///   object is relayed verbatim
/// - `Fallback`: the provider answered with text that is not a JSON object;
///   serializes as `{"ok": true, "raw": <text>}`
/// - `Error`: the call failed or produced nothing; serializes as
///   `{"ok": false, "error": <detail>}`
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionResult {
    Structured(Map<String, Value>),
    Fallback { raw: String },
    Error { error: Value },
}

impl CompletionResult {
    pub fn fallback(raw: impl Into<String>) -> Self {
        CompletionResult::Fallback { raw: raw.into() }
    }

    pub fn error(error: impl Into<Value>) -> Self {
        CompletionResult::Error {
            error: error.into(),
        }
    }

    pub fn no_response() -> Self {
        Self::error(NO_RESPONSE_ERROR)
    }

    /// Whether the result reports success through its `ok` field
    ///
    /// Structured objects only count as ok when they say so themselves.
    pub fn is_ok(&self) -> bool {
        match self {
            CompletionResult::Structured(fields) => {
                fields.get("ok").and_then(Value::as_bool).unwrap_or(false)
            }
            CompletionResult::Fallback { .. } => true,
            CompletionResult::Error { .. } => false,
        }
    }

    /// Look up a non-empty string field of a structured result
    pub fn text_field(&self, key: &str) -> Option<&str> {
        match self {
            CompletionResult::Structured(fields) => fields
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty()),
            _ => None,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        match self {
            CompletionResult::Fallback { raw } => Some(raw),
            _ => None,
        }
    }

    /// JSON object sent back to the caller
    pub fn into_value(self) -> Value {
        match self {
            CompletionResult::Structured(fields) => Value::Object(fields),
            CompletionResult::Fallback { raw } => json!({ "ok": true, "raw": raw }),
            CompletionResult::Error { error } => json!({ "ok": false, "error": error }),
        }
    }
}

impl Serialize for CompletionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.clone().into_value().serialize(serializer)
    }
}
