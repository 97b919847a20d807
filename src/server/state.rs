//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::providers::{ImgbbClient, OpenRouterClient, RunwayClient, SendGridClient};
use crate::core::traits::{CompletionProvider, EmailSender, ImageHost, MediaTaskProvider};
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;

/// HTTP server state shared across handlers
///
/// Providers sit behind trait objects so handlers can be exercised against
/// substitutes. Everything is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Relay configuration (shared read-only)
    pub config: Arc<Config>,
    /// Image/video generation jobs
    pub media: Arc<dyn MediaTaskProvider>,
    /// Form completions
    pub completion: Arc<dyn CompletionProvider>,
    /// Image hosting for prompt images
    pub image_host: Arc<dyn ImageHost>,
    /// Email delivery, absent when no credential is configured
    pub email: Option<Arc<dyn EmailSender>>,
}

impl AppState {
    pub fn new(
        config: Config,
        media: Arc<dyn MediaTaskProvider>,
        completion: Arc<dyn CompletionProvider>,
        image_host: Arc<dyn ImageHost>,
        email: Option<Arc<dyn EmailSender>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            media,
            completion,
            image_host,
            email,
        }
    }

    /// Build the real provider clients from configuration
    pub fn from_config(config: Config) -> Result<Self> {
        let providers = config.providers();

        let media = Arc::new(RunwayClient::new(&providers.runway)?);
        let completion = Arc::new(OpenRouterClient::new(&providers.openrouter)?);
        let image_host = Arc::new(ImgbbClient::new(&providers.imgbb)?);
        let email: Option<Arc<dyn EmailSender>> = if providers.sendgrid.is_enabled() {
            Some(Arc::new(SendGridClient::new(&providers.sendgrid)?))
        } else {
            info!("SendGrid not configured, campaign emails will not be sent");
            None
        };

        Ok(Self::new(config, media, completion, image_host, email))
    }

    /// Get relay configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
