//! OpenRouter completion client

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, warn};

use super::error::CompletionTransportError;
use super::models::{ChatCompletionRequest, ChatMessage, first_choice_text};
use crate::config::OpenRouterConfig;
use crate::core::normalizer::normalize;
use crate::core::providers::shared::endpoint_url;
use crate::core::traits::CompletionProvider;
use crate::core::types::CompletionResult;
use crate::utils::error::Result;

/// Sampling temperature applied to every call
pub const TEMPERATURE: f64 = 0.7;

/// Output length bound applied to every call
pub const MAX_TOKENS: u32 = 900;

/// Fixed system directive sent ahead of every user message
pub const SYSTEM_PROMPT: &str = "You are a backend assistant that transforms marketing form input into a structured JSON response. \
IMPORTANT: Return exactly one JSON object and nothing else (no backticks, no extra text). \
If asked to generate content, include fields described in the prompt. \
If no output is possible, return { \"ok\": false, \"error\": \"reason\" }.";

/// Client for OpenRouter chat completions
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    client: Client,
    config: OpenRouterConfig,
}

impl OpenRouterClient {
    pub fn new(config: &OpenRouterConfig) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// One round trip, returning the provider's response body as JSON
    async fn send(&self, user_content: &str) -> std::result::Result<Value, CompletionTransportError> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .map(|k| k.expose())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                CompletionTransportError::Configuration("OpenRouter API key not configured".into())
            })?;
        let url = endpoint_url(&self.config.base_url, &["chat", "completions"])
            .map_err(CompletionTransportError::Configuration)?;

        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: user_content,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        debug!(provider = "openrouter", model = %self.config.model, "Sending completion request");

        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CompletionTransportError::Api {
                status_code: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body).unwrap_or(Value::Null))
    }
}

#[async_trait]
impl CompletionProvider for OpenRouterClient {
    async fn complete(&self, user_prompt: &str, instructions: &str) -> CompletionResult {
        let user_content = format!("{}\n\n{}", instructions, user_prompt);

        match self.send(&user_content).await {
            Ok(response) => {
                let result = normalize(first_choice_text(&response));
                if let CompletionResult::Fallback { .. } = result {
                    warn!(provider = "openrouter", "Model reply was not a JSON object, relaying raw text");
                }
                result
            }
            Err(e) => {
                error!(
                    provider = "openrouter",
                    error_type = e.error_type(),
                    error = %e,
                    "OpenRouter error"
                );
                CompletionResult::error(e.detail())
            }
        }
    }
}
