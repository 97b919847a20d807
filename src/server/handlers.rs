//! HTTP route handlers

use actix_web::HttpResponse;
use serde_json::json;

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "ok": true,
        "time": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }))
}
