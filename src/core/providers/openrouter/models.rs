//! OpenRouter wire types

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub(crate) role: &'static str,
    pub(crate) content: &'a str,
}

/// Chat-completions request body
#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest<'a> {
    pub(crate) model: &'a str,
    pub(crate) messages: [ChatMessage<'a>; 2],
    pub(crate) temperature: f64,
    pub(crate) max_tokens: u32,
}

/// Text of the first choice
///
/// Chat-style `message.content` wins over the legacy `text` field.
pub(crate) fn first_choice_text(response: &Value) -> Option<&str> {
    let choice = response.get("choices")?.get(0)?;
    choice
        .pointer("/message/content")
        .and_then(Value::as_str)
        .or_else(|| choice.get("text").and_then(Value::as_str))
}
