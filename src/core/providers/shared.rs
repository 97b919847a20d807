//! Shared utilities for all providers

use serde_json::Value;
use url::Url;

/// Append path segments to a provider base URL
///
/// Segments are percent-encoded, so caller-supplied ids cannot change the
/// path shape. A trailing slash on the base is ignored.
pub(crate) fn endpoint_url(base_url: &str, segments: &[&str]) -> Result<Url, String> {
    let mut url =
        Url::parse(base_url).map_err(|e| format!("Invalid base URL '{}': {}", base_url, e))?;
    url.path_segments_mut()
        .map_err(|_| format!("Base URL '{}' cannot carry a path", base_url))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Provider body as JSON when it parses, otherwise as a string
pub(crate) fn body_payload(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string())))
}
