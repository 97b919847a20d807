//! Generation task endpoints
//!
//! Submissions return only the provider task id. Status endpoints relay the
//! provider's JSON unchanged; the frontend does its own polling.

use crate::core::providers::runway::MediaTaskError;
use crate::core::types::{ImageToVideoParams, TextToImageParams};
use crate::server::state::AppState;
use crate::utils::error::{RelayError, Result};
use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::{error, warn};

const MISSING_TASK_ID_MESSAGE: &str = "RunwayML did not return a task ID";

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/text-to-image", web::post().to(text_to_image))
        .route(
            "/api/poll-image-status/{task_id}",
            web::get().to(poll_image_status),
        )
        .route("/api/generate-video", web::post().to(generate_video))
        .route("/api/check-status/{task_id}", web::get().to(check_status));
}

async fn text_to_image(
    state: web::Data<AppState>,
    params: web::Json<TextToImageParams>,
) -> Result<HttpResponse> {
    let task = state
        .media
        .submit_text_to_image(&params)
        .await
        .map_err(|e| submission_failure(e, "RunwayML API submission failed"))?;
    Ok(HttpResponse::Ok().json(json!({ "id": task.task_id })))
}

async fn generate_video(
    state: web::Data<AppState>,
    params: web::Json<ImageToVideoParams>,
) -> Result<HttpResponse> {
    let task = state
        .media
        .submit_image_to_video(&params)
        .await
        .map_err(|e| submission_failure(e, "Video generation API failed"))?;
    Ok(HttpResponse::Ok().json(json!({ "id": task.task_id })))
}

async fn poll_image_status(
    state: web::Data<AppState>,
    task_id: web::Path<String>,
) -> Result<HttpResponse> {
    task_status(&state, &task_id, "Polling RunwayML task status failed").await
}

async fn check_status(
    state: web::Data<AppState>,
    task_id: web::Path<String>,
) -> Result<HttpResponse> {
    task_status(&state, &task_id, "Failed to get video generation status").await
}

async fn task_status(
    state: &AppState,
    task_id: &str,
    failure_message: &str,
) -> Result<HttpResponse> {
    match state.media.get_task_status(task_id).await {
        Ok(status) => Ok(HttpResponse::Ok().json(status.payload())),
        Err(MediaTaskError::InvalidRequest(message)) => Err(RelayError::bad_request(message)),
        Err(e) => {
            error!(task_id = %task_id, error = %e, payload = ?e.payload(), "Task status query failed");
            Err(RelayError::upstream(failure_message))
        }
    }
}

fn submission_failure(err: MediaTaskError, failure_message: &str) -> RelayError {
    match err {
        MediaTaskError::InvalidRequest(message) => {
            warn!(error = %message, "Rejected generation request");
            RelayError::bad_request(message)
        }
        e if e.is_missing_task_id() => {
            error!(payload = ?e.payload(), "No task ID returned");
            RelayError::upstream(MISSING_TASK_ID_MESSAGE)
        }
        e => {
            error!(error = %e, payload = ?e.payload(), "Generation submit error");
            RelayError::upstream(failure_message)
        }
    }
}
