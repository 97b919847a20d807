//! Generation task types
//!
//! A generation task is owned by the external provider. Locally we only keep
//! the identifier it hands back and the parameters we submitted with it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of generation job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    ImageFromText,
    VideoFromImage,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::ImageFromText => "image_from_text",
            TaskKind::VideoFromImage => "video_from_image",
        }
    }
}

/// Reference asset for image generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceImage {
    /// HTTPS URL or data URI of the reference asset
    pub uri: String,
    /// Tag the prompt can use to mention this reference (`@tag`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Source image for a video job
///
/// Either a single image reference or a list of positioned keyframes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PromptImage {
    Uri(String),
    Keyframes(Vec<PromptKeyframe>),
}

impl PromptImage {
    pub fn is_empty(&self) -> bool {
        match self {
            PromptImage::Uri(uri) => uri.trim().is_empty(),
            PromptImage::Keyframes(frames) => frames.iter().all(|f| f.uri.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptKeyframe {
    pub uri: String,
    /// `first` or `last`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// Parameters for an image-from-text job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextToImageParams {
    pub prompt_text: String,
    /// Output aspect ratio, e.g. `1920:1080`
    pub ratio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_images: Option<Vec<ReferenceImage>>,
}

impl TextToImageParams {
    pub fn new(prompt_text: impl Into<String>, ratio: impl Into<String>) -> Self {
        Self {
            prompt_text: prompt_text.into(),
            ratio: ratio.into(),
            seed: None,
            reference_images: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_reference(mut self, reference: ReferenceImage) -> Self {
        self.reference_images
            .get_or_insert_with(Vec::new)
            .push(reference);
        self
    }
}

/// Parameters for a video-from-image job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageToVideoParams {
    pub prompt_text: String,
    pub prompt_image: PromptImage,
    pub ratio: String,
    /// Clip length in seconds
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl ImageToVideoParams {
    pub fn new(
        prompt_text: impl Into<String>,
        prompt_image: PromptImage,
        ratio: impl Into<String>,
        duration: u32,
    ) -> Self {
        Self {
            prompt_text: prompt_text.into(),
            prompt_image,
            ratio: ratio.into(),
            duration,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Parameters a task was submitted with
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SubmittedParameters {
    TextToImage(TextToImageParams),
    ImageToVideo(ImageToVideoParams),
}

/// One external job, identified by the provider-assigned task id
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationTask {
    pub task_id: String,
    pub kind: TaskKind,
    pub submitted_parameters: SubmittedParameters,
}

impl GenerationTask {
    pub fn new(task_id: impl Into<String>, submitted_parameters: SubmittedParameters) -> Self {
        let kind = match &submitted_parameters {
            SubmittedParameters::TextToImage(_) => TaskKind::ImageFromText,
            SubmittedParameters::ImageToVideo(_) => TaskKind::VideoFromImage,
        };
        Self {
            task_id: task_id.into(),
            kind,
            submitted_parameters,
        }
    }
}

/// Provider-reported task state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl TaskState {
    /// Map a provider status string onto the four local states
    ///
    /// Throttled jobs are still waiting for capacity and cancelled jobs will
    /// never produce output, so they fold into `Pending` and `Failed`.
    pub fn from_provider(status: &str) -> Option<Self> {
        match status.to_ascii_uppercase().as_str() {
            "PENDING" | "THROTTLED" | "QUEUED" => Some(TaskState::Pending),
            "RUNNING" | "PROCESSING" => Some(TaskState::Running),
            "SUCCEEDED" | "SUCCESS" | "COMPLETED" => Some(TaskState::Succeeded),
            "FAILED" | "FAILURE" | "CANCELLED" | "CANCELED" => Some(TaskState::Failed),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskState::Succeeded | TaskState::Failed)
    }
}

/// Status snapshot read from the provider
///
/// The provider payload is kept verbatim; callers that relay it onward
/// serialize it unchanged. The accessors only interpret it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TaskStatus {
    payload: Value,
}

impl TaskStatus {
    pub fn new(payload: Value) -> Self {
        Self { payload }
    }

    pub fn state(&self) -> Option<TaskState> {
        self.payload
            .get("status")
            .and_then(Value::as_str)
            .and_then(TaskState::from_provider)
    }

    /// Output asset URLs, present once the task succeeded
    pub fn output(&self) -> Vec<&str> {
        match self.payload.get("output") {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            Some(Value::String(url)) => vec![url.as_str()],
            _ => Vec::new(),
        }
    }

    /// Failure detail, present once the task failed
    pub fn failure(&self) -> Option<&str> {
        ["failure", "error", "failureCode"]
            .iter()
            .find_map(|key| self.payload.get(*key).and_then(Value::as_str))
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn into_payload(self) -> Value {
        self.payload
    }
}

/// Remote URL of an image hosted through the upload collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImageRef {
    pub url: String,
}
