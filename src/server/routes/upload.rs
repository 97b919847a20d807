//! Image upload endpoint

use crate::server::state::AppState;
use crate::utils::error::{RelayError, Result};
use actix_web::{HttpResponse, web};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};

const INVALID_IMAGE_MESSAGE: &str = "Invalid or missing base64 image";
const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload image to ImgBB";
const IMAGE_DATA_URL_PREFIX: &str = "data:image/";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageRequest {
    /// `data:image/<type>;base64,<data>` URL
    #[serde(default)]
    pub base64_image: Option<String>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/upload-image", web::post().to(upload_image));
}

async fn upload_image(
    state: web::Data<AppState>,
    body: Option<web::Json<UploadImageRequest>>,
) -> Result<HttpResponse> {
    let Some(data_url) = body
        .as_ref()
        .and_then(|b| b.base64_image.as_deref())
        .filter(|url| url.starts_with(IMAGE_DATA_URL_PREFIX))
    else {
        return Err(RelayError::bad_request(INVALID_IMAGE_MESSAGE));
    };

    // Reported the same way as a rejected upload
    let Some(data) = image_data(data_url) else {
        warn!("Image data URL has no decodable payload");
        return Err(RelayError::upstream(UPLOAD_FAILED_MESSAGE));
    };

    let image = state.image_host.upload(data).await.map_err(|e| {
        error!(error = %e, "ImgBB upload error");
        RelayError::upstream(UPLOAD_FAILED_MESSAGE)
    })?;
    Ok(HttpResponse::Ok().json(json!({ "imageUrl": image.url })))
}

/// Base64 payload after the first comma of a data URL, if it decodes
fn image_data(data_url: &str) -> Option<&str> {
    let (_, data) = data_url.split_once(',')?;
    let data = data.trim();
    if data.is_empty() || STANDARD.decode(data).is_err() {
        return None;
    }
    Some(data)
}
