//! Configuration management for the relay
//!
//! Configuration is read once at startup and shared read-only afterwards.
//! Sources, lowest precedence first: built-in defaults, the YAML file, the
//! process environment (including a `.env` file loaded through `dotenvy`).

pub mod models;

pub use models::*;

use crate::utils::error::{RelayError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Default location of the YAML configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/relay.yaml";

/// Main configuration struct for the relay
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Relay configuration
    pub relay: RelayConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self {
            relay: Self::read_file(path.as_ref()).await?,
        };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut relay = RelayConfig::default();
        relay.apply_overrides(|key| std::env::var(key).ok());

        let config = Self { relay };
        config.validate()?;
        Ok(config)
    }

    /// Startup loader: `.env`, then the file when present, then the environment
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }

        let path = path.as_ref();
        let mut relay = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::read_file(path).await?
        } else {
            info!("No configuration file at {:?}, using defaults", path);
            RelayConfig::default()
        };
        relay.apply_overrides(|key| std::env::var(key).ok());

        let config = Self { relay };
        config.validate()?;
        Ok(config)
    }

    async fn read_file(path: &Path) -> Result<RelayConfig> {
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| RelayError::Config(format!("Failed to read config file: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| RelayError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.relay.server
    }

    /// Get provider configuration
    pub fn providers(&self) -> &ProvidersConfig {
        &self.relay.providers
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.relay.logging
    }

    /// Validate the entire configuration
    ///
    /// Missing credentials are reported but are not an error.
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.relay
            .server
            .validate()
            .map_err(|e| RelayError::Config(format!("Server config error: {}", e)))?;

        self.relay
            .server
            .cors
            .validate()
            .map_err(|e| RelayError::Config(format!("CORS config error: {}", e)))?;

        self.relay
            .providers
            .validate()
            .map_err(|e| RelayError::Config(format!("Provider config error: {}", e)))?;

        for key in self.relay.providers.missing_credentials() {
            warn!("{} not set, the matching endpoints will fail until it is", key);
        }

        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.relay)
            .map_err(|e| RelayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
