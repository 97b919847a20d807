//! Runway generation task client

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};

use super::error::{MISSING_TASK_ID, MediaTaskError};
use super::models::{CreateTaskRequest, extract_task_id};
use crate::config::RunwayConfig;
use crate::core::providers::shared::{body_payload, endpoint_url};
use crate::core::traits::MediaTaskProvider;
use crate::core::types::{
    GenerationTask, ImageToVideoParams, SubmittedParameters, TaskStatus, TextToImageParams,
};
use crate::utils::error::{RelayError, Result};

const VERSION_HEADER: &str = "x-runway-version";

/// Client for the Runway task API
///
/// Holds no task state: submissions return the provider's id and every status
/// read is a fresh round trip. No timeout is imposed here.
#[derive(Debug, Clone)]
pub struct RunwayClient {
    client: Client,
    config: RunwayConfig,
}

impl RunwayClient {
    pub fn new(config: &RunwayConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let version = HeaderValue::from_str(config.api_version.trim()).map_err(|e| {
            RelayError::Config(format!(
                "Invalid Runway API version '{}': {}",
                config.api_version, e
            ))
        })?;
        headers.insert(HeaderName::from_static(VERSION_HEADER), version);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn api_key(&self) -> Option<&str> {
        self.config
            .api_key
            .as_ref()
            .map(|k| k.expose())
            .filter(|k| !k.is_empty())
    }

    /// POST a create-task request and return the provider-assigned id
    async fn create_task<P: Serialize + Sync>(
        &self,
        endpoint: &str,
        model: &str,
        params: &P,
    ) -> std::result::Result<String, MediaTaskError> {
        let api_key = self
            .api_key()
            .ok_or_else(|| MediaTaskError::submission("Runway API key not configured", None))?;
        let url = endpoint_url(&self.config.base_url, &[endpoint])
            .map_err(|e| MediaTaskError::submission(e, None))?;

        let body = CreateTaskRequest { model, params };
        debug!(provider = "runway", url = %url, model = model, "Submitting generation task");

        let response = self
            .client
            .post(url.clone())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(provider = "runway", error = %e, "Runway submit request failed");
                MediaTaskError::submission(format!("Request to {} failed: {}", url, e), None)
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            MediaTaskError::submission(format!("Failed to read response: {}", e), None)
        })?;

        if !status.is_success() {
            let payload = body_payload(&text);
            error!(provider = "runway", status = status.as_u16(), payload = ?payload, "Runway submit error");
            return Err(MediaTaskError::submission(
                format!("HTTP {}", status.as_u16()),
                payload,
            ));
        }

        let value: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
        match extract_task_id(&value) {
            Some(id) => Ok(id.to_string()),
            None => {
                error!(provider = "runway", response = %text, "No task ID returned");
                Err(MediaTaskError::submission(
                    MISSING_TASK_ID,
                    body_payload(&text),
                ))
            }
        }
    }
}

fn require_prompt(prompt: &str) -> std::result::Result<(), MediaTaskError> {
    if prompt.trim().is_empty() {
        return Err(MediaTaskError::InvalidRequest(
            "promptText is required".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl MediaTaskProvider for RunwayClient {
    async fn submit_text_to_image(
        &self,
        params: &TextToImageParams,
    ) -> std::result::Result<GenerationTask, MediaTaskError> {
        require_prompt(&params.prompt_text)?;

        let task_id = self
            .create_task("text_to_image", &self.config.image_model, params)
            .await?;
        info!(provider = "runway", task_id = %task_id, "Image generation task submitted");

        Ok(GenerationTask::new(
            task_id,
            SubmittedParameters::TextToImage(params.clone()),
        ))
    }

    async fn submit_image_to_video(
        &self,
        params: &ImageToVideoParams,
    ) -> std::result::Result<GenerationTask, MediaTaskError> {
        require_prompt(&params.prompt_text)?;
        if params.prompt_image.is_empty() {
            return Err(MediaTaskError::InvalidRequest(
                "promptImage is required".to_string(),
            ));
        }

        let task_id = self
            .create_task("image_to_video", &self.config.video_model, params)
            .await?;
        info!(provider = "runway", task_id = %task_id, "Video generation task submitted");

        Ok(GenerationTask::new(
            task_id,
            SubmittedParameters::ImageToVideo(params.clone()),
        ))
    }

    async fn get_task_status(
        &self,
        task_id: &str,
    ) -> std::result::Result<TaskStatus, MediaTaskError> {
        if task_id.trim().is_empty() {
            return Err(MediaTaskError::InvalidRequest(
                "taskId is required".to_string(),
            ));
        }
        let api_key = self
            .api_key()
            .ok_or_else(|| MediaTaskError::query(task_id, "Runway API key not configured", None))?;
        let url = endpoint_url(&self.config.base_url, &["tasks", task_id])
            .map_err(|e| MediaTaskError::query(task_id, e, None))?;

        let response = self
            .client
            .get(url)
            .bearer_auth(api_key)
            .send()
            .await
            .map_err(|e| {
                error!(provider = "runway", task_id = %task_id, error = %e, "Runway polling error");
                MediaTaskError::query(task_id, format!("Request failed: {}", e), None)
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            MediaTaskError::query(task_id, format!("Failed to read response: {}", e), None)
        })?;

        if !status.is_success() {
            let payload = body_payload(&text);
            error!(provider = "runway", task_id = %task_id, status = status.as_u16(), payload = ?payload, "Runway polling error");
            return Err(MediaTaskError::query(
                task_id,
                format!("HTTP {}", status.as_u16()),
                payload,
            ));
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(value @ Value::Object(_)) => {
                debug!(provider = "runway", task_id = %task_id, "Task status read");
                Ok(TaskStatus::new(value))
            }
            _ => Err(MediaTaskError::query(
                task_id,
                "Malformed task status response",
                body_payload(&text),
            )),
        }
    }
}
