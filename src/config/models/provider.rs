//! Provider configuration
//!
//! One section per external service. Credentials are optional: a missing key
//! leaves the service configured but failing every call.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Credential that never shows up in `Debug` output
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ApiKey(String);

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl From<ApiKey> for String {
    fn from(key: ApiKey) -> Self {
        key.0
    }
}

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_string())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() > 8 {
            let head: String = chars[..2].iter().collect();
            let tail: String = chars[chars.len() - 2..].iter().collect();
            write!(f, "\"{}***{}\"", head, tail)
        } else {
            f.write_str("\"***\"")
        }
    }
}

/// All provider sections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub runway: RunwayConfig,
    #[serde(default)]
    pub openrouter: OpenRouterConfig,
    #[serde(default)]
    pub imgbb: ImgbbConfig,
    #[serde(default)]
    pub sendgrid: SendGridConfig,
}

impl ProvidersConfig {
    pub fn validate(&self) -> Result<(), String> {
        validate_base_url("runway", &self.runway.base_url)?;
        validate_base_url("openrouter", &self.openrouter.base_url)?;
        validate_base_url("imgbb", &self.imgbb.base_url)?;
        validate_base_url("sendgrid", &self.sendgrid.base_url)?;

        if self.openrouter.model.trim().is_empty() {
            return Err("OpenRouter model cannot be empty".to_string());
        }
        if self.runway.image_model.trim().is_empty() || self.runway.video_model.trim().is_empty()
        {
            return Err("Runway model selectors cannot be empty".to_string());
        }

        Ok(())
    }

    /// Names of services that will fail every call for lack of a credential
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !has_key(&self.runway.api_key) {
            missing.push("RUNWAYML_API_SECRET");
        }
        if !has_key(&self.openrouter.api_key) {
            missing.push("OPENROUTER_API_KEY");
        }
        if !has_key(&self.imgbb.api_key) {
            missing.push("IMGBB_API_KEY");
        }
        if !has_key(&self.sendgrid.api_key) {
            missing.push("SENDGRID_API_KEY");
        }
        missing
    }
}

fn has_key(key: &Option<ApiKey>) -> bool {
    key.as_ref().is_some_and(|k| !k.is_empty())
}

fn validate_base_url(name: &str, base_url: &str) -> Result<(), String> {
    let parsed = url::Url::parse(base_url)
        .map_err(|e| format!("{} base URL '{}' is invalid: {}", name, base_url, e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(format!(
            "{} base URL must use http or https, got {}",
            name, scheme
        )),
    }
}

/// Image/video generation provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunwayConfig {
    #[serde(default)]
    pub api_key: Option<ApiKey>,
    #[serde(default = "default_runway_base_url")]
    pub base_url: String,
    /// Value of the `X-Runway-Version` header
    #[serde(default = "default_runway_api_version")]
    pub api_version: String,
    #[serde(default = "default_runway_image_model")]
    pub image_model: String,
    #[serde(default = "default_runway_video_model")]
    pub video_model: String,
}

impl Default for RunwayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_runway_base_url(),
            api_version: default_runway_api_version(),
            image_model: default_runway_image_model(),
            video_model: default_runway_video_model(),
        }
    }
}

/// Text-completion provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRouterConfig {
    #[serde(default)]
    pub api_key: Option<ApiKey>,
    #[serde(default = "default_openrouter_base_url")]
    pub base_url: String,
    /// Completion model identifier
    #[serde(default = "default_openrouter_model")]
    pub model: String,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_openrouter_base_url(),
            model: default_openrouter_model(),
        }
    }
}

/// Image hosting provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImgbbConfig {
    #[serde(default)]
    pub api_key: Option<ApiKey>,
    #[serde(default = "default_imgbb_base_url")]
    pub base_url: String,
}

impl Default for ImgbbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_imgbb_base_url(),
        }
    }
}

/// Email delivery provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendGridConfig {
    #[serde(default)]
    pub api_key: Option<ApiKey>,
    #[serde(default = "default_sendgrid_base_url")]
    pub base_url: String,
    #[serde(default = "default_sender")]
    pub default_sender: String,
}

impl Default for SendGridConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_sendgrid_base_url(),
            default_sender: default_sender(),
        }
    }
}

impl SendGridConfig {
    /// Email delivery is only wired up when a key is present
    pub fn is_enabled(&self) -> bool {
        has_key(&self.api_key)
    }
}

fn default_runway_base_url() -> String {
    "https://api.dev.runwayml.com/v1".to_string()
}

fn default_runway_api_version() -> String {
    "2024-11-06".to_string()
}

fn default_runway_image_model() -> String {
    "gen4_image".to_string()
}

fn default_runway_video_model() -> String {
    "gen4_turbo".to_string()
}

fn default_openrouter_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_openrouter_model() -> String {
    "openai/gpt-5-chat".to_string()
}

fn default_imgbb_base_url() -> String {
    "https://api.imgbb.com/1".to_string()
}

fn default_sendgrid_base_url() -> String {
    "https://api.sendgrid.com/v3".to_string()
}

fn default_sender() -> String {
    "no-reply@example.com".to_string()
}
