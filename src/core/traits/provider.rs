//! Provider seams
//!
//! The HTTP layer talks to providers only through these traits, which keeps
//! route handlers testable against substitute implementations.

use async_trait::async_trait;

use crate::core::providers::imgbb::UploadError;
use crate::core::providers::runway::MediaTaskError;
use crate::core::providers::sendgrid::{EmailError, EmailMessage};
use crate::core::types::{
    CompletionResult, GenerationTask, ImageToVideoParams, TaskStatus, TextToImageParams,
    UploadedImageRef,
};

/// Long-running generation jobs, tracked by provider task id
///
/// Each call is a single round trip. Submission and status reads are
/// decoupled: the caller owns the poll cadence and when to give up.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaTaskProvider: Send + Sync {
    /// Submit an image-from-text job and return the provider's task
    async fn submit_text_to_image(
        &self,
        params: &TextToImageParams,
    ) -> Result<GenerationTask, MediaTaskError>;

    /// Submit a video-from-image job and return the provider's task
    async fn submit_image_to_video(
        &self,
        params: &ImageToVideoParams,
    ) -> Result<GenerationTask, MediaTaskError>;

    /// Read the provider's current view of a task, uncached
    async fn get_task_status(&self, task_id: &str) -> Result<TaskStatus, MediaTaskError>;
}

/// Single-JSON-object text completion
///
/// Never fails: every failure mode is folded into the returned result.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// `instructions` is prepended to `user_prompt`; pass `""` for none.
    async fn complete(&self, user_prompt: &str, instructions: &str) -> CompletionResult;
}

/// One-shot image hosting
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Upload base64-encoded image bytes (no `data:` prefix)
    async fn upload(&self, base64_image: &str) -> Result<UploadedImageRef, UploadError>;
}

/// Outbound email delivery
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError>;
}
