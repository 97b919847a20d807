//! Main relay configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Main relay configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RelayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// External provider configuration
    #[serde(default)]
    pub providers: ProvidersConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RelayConfig {
    /// Overlay values found through `lookup` (normally the process environment)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = get("HOST") {
            self.server.host = host;
        }
        if let Some(port) = get("PORT").and_then(|p| p.trim().parse().ok()) {
            self.server.port = port;
        }

        if let Some(key) = get("RUNWAYML_API_SECRET") {
            self.providers.runway.api_key = Some(ApiKey::new(key));
        }
        if let Some(url) = get("RUNWAY_BASE_URL") {
            self.providers.runway.base_url = url;
        }
        if let Some(key) = get("OPENROUTER_API_KEY") {
            self.providers.openrouter.api_key = Some(ApiKey::new(key));
        }
        if let Some(model) = get("OPENROUTER_MODEL") {
            self.providers.openrouter.model = model;
        }
        if let Some(url) = get("OPENROUTER_BASE_URL") {
            self.providers.openrouter.base_url = url;
        }
        if let Some(key) = get("IMGBB_API_KEY") {
            self.providers.imgbb.api_key = Some(ApiKey::new(key));
        }
        if let Some(key) = get("SENDGRID_API_KEY") {
            self.providers.sendgrid.api_key = Some(ApiKey::new(key));
        }

        if let Some(level) = get("RUST_LOG") {
            self.logging.level = level;
        }
        if let Some(format) = get("LOG_FORMAT") {
            self.logging.json = format.eq_ignore_ascii_case("json");
        }
    }
}
