//! Runway provider
//!
//! Image-from-text and video-from-image generation jobs. Jobs run
//! asynchronously on the provider side and are tracked by task id.
//!
//! Documentation: https://docs.dev.runwayml.com/

pub mod client;
pub mod error;
pub(crate) mod models;

pub use client::RunwayClient;
pub use error::MediaTaskError;
