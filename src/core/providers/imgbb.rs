//! ImgBB image hosting
//!
//! Uploads base64 image data and hands back the public URL, which the
//! generation provider can then fetch as a prompt image.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::Form;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use crate::config::ImgbbConfig;
use crate::core::providers::shared::{body_payload, endpoint_url};
use crate::core::traits::ImageHost;
use crate::core::types::UploadedImageRef;
use crate::utils::error::Result;

/// Image upload failures
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    /// Non-success status from the host
    #[error("Upload rejected (status {status_code})")]
    Rejected {
        status_code: u16,
        payload: Option<Value>,
    },

    #[error("Upload response did not contain an image URL")]
    MissingUrl,
}

impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct ImgbbClient {
    client: Client,
    config: ImgbbConfig,
}

impl ImgbbClient {
    pub fn new(config: &ImgbbConfig) -> Result<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl ImageHost for ImgbbClient {
    async fn upload(&self, base64_image: &str) -> std::result::Result<UploadedImageRef, UploadError> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .map(|k| k.expose().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| UploadError::Configuration("ImgBB API key not configured".into()))?;
        let url = endpoint_url(&self.config.base_url, &["upload"])
            .map_err(UploadError::Configuration)?;

        let form = Form::new()
            .text("key", api_key)
            .text("image", base64_image.to_string());

        debug!(provider = "imgbb", bytes = base64_image.len(), "Uploading image");

        let response = self.client.post(url).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let payload = body_payload(&body);
            error!(provider = "imgbb", status = status.as_u16(), payload = ?payload, "ImgBB upload error");
            return Err(UploadError::Rejected {
                status_code: status.as_u16(),
                payload,
            });
        }

        let value: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
        value
            .pointer("/data/url")
            .and_then(Value::as_str)
            .filter(|u| !u.is_empty())
            .map(|u| UploadedImageRef { url: u.to_string() })
            .ok_or(UploadError::MissingUrl)
    }
}
