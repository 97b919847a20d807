//! Common test utilities for creative-relay

use creative_relay::config::{ApiKey, Config};
use serde_json::{Value, json};
use wiremock::ResponseTemplate;

/// Configuration with credentials set and every provider aimed at `base_url`
pub fn relay_config(base_url: &str) -> Config {
    let mut config = Config::default();
    let providers = &mut config.relay.providers;

    providers.runway.api_key = Some(ApiKey::new("key_integration"));
    providers.runway.base_url = format!("{}/runway/v1", base_url);
    providers.openrouter.api_key = Some(ApiKey::new("sk-or-integration"));
    providers.openrouter.base_url = format!("{}/openrouter/api/v1", base_url);
    providers.imgbb.api_key = Some(ApiKey::new("imgbb-integration"));
    providers.imgbb.base_url = format!("{}/imgbb/1", base_url);
    providers.sendgrid.api_key = Some(ApiKey::new("SG.integration"));
    providers.sendgrid.base_url = format!("{}/sendgrid/v3", base_url);

    config
}

/// OpenRouter chat response whose first choice carries `content`
pub fn chat_reply(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(chat_body(content))
}

pub fn chat_body(content: &str) -> Value {
    json!({
        "id": "gen-1",
        "model": "openai/gpt-5-chat",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
    })
}
