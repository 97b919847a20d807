//! HTTP route modules
//!
//! Failures are returned as `RelayError`, which renders
//! `{"error": "<fixed message>"}`; provider detail only goes to the log.

pub mod forms;
pub mod media;
pub mod upload;

use actix_web::web;

/// Register every `/api` route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    media::configure_routes(cfg);
    upload::configure_routes(cfg);
    forms::configure_routes(cfg);
}
