//! SendGrid email delivery

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info};

use crate::config::SendGridConfig;
use crate::core::providers::shared::endpoint_url;
use crate::core::traits::EmailSender;
use crate::utils::error::Result;

/// Email delivery failures
#[derive(Error, Debug)]
pub enum EmailError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Email rejected (status {status_code}): {body}")]
    Rejected { status_code: u16, body: String },
}

impl From<reqwest::Error> for EmailError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// A single HTML email
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Clone)]
pub struct SendGridClient {
    client: Client,
    config: SendGridConfig,
}

impl SendGridClient {
    pub fn new(config: &SendGridConfig) -> Result<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl EmailSender for SendGridClient {
    async fn send(&self, message: &EmailMessage) -> std::result::Result<(), EmailError> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .map(|k| k.expose())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| EmailError::Configuration("SendGrid API key not configured".into()))?;
        let url = endpoint_url(&self.config.base_url, &["mail", "send"])
            .map_err(EmailError::Configuration)?;

        let body = json!({
            "personalizations": [{"to": [{"email": message.to}]}],
            "from": {"email": message.from},
            "subject": message.subject,
            "content": [{"type": "text/html", "value": message.html}]
        });

        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(provider = "sendgrid", status = status.as_u16(), body = %body, "SendGrid send error");
            return Err(EmailError::Rejected {
                status_code: status.as_u16(),
                body,
            });
        }

        info!(provider = "sendgrid", to = %message.to, "Email sent");
        Ok(())
    }
}
