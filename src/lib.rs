//! # creative-relay
//!
//! Backend relay between a marketing frontend and external generative
//! services.
//!
//! ## Features
//!
//! - **Generation tasks**: submit image-from-text and video-from-image jobs to
//!   Runway and read their status by task id
//! - **JSON-only completions**: OpenRouter calls constrained to a single JSON
//!   object, with raw-text fallback when the model does not comply
//! - **Marketing forms**: one endpoint per form, each rendering its own prompt
//! - **Image hosting and email**: ImgBB uploads for prompt images, optional
//!   SendGrid delivery for generated campaigns
//!
//! ## Library use
//!
//! ```rust,no_run
//! use creative_relay::core::poller::TaskPoller;
//! use creative_relay::core::providers::RunwayClient;
//! use creative_relay::core::traits::MediaTaskProvider;
//! use creative_relay::core::types::TextToImageParams;
//! use creative_relay::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let runway = RunwayClient::new(&config.providers().runway)?;
//!
//!     let task = runway
//!         .submit_text_to_image(&TextToImageParams::new("a lighthouse at dusk", "1360:768"))
//!         .await?;
//!     let status = TaskPoller::default().wait(&runway, &task.task_id).await?;
//!     println!("{:?}", status.output());
//!     Ok(())
//! }
//! ```
//!
//! ## Server mode
//!
//! ```rust,no_run
//! use creative_relay::{Config, Relay};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/relay.yaml").await?;
//!     Relay::new(config)?.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::normalizer::normalize;
pub use core::types::CompletionResult;
pub use utils::error::{RelayError, Result};

use tracing::info;

/// The relay server, ready to run
pub struct Relay {
    server: server::HttpServer,
}

impl Relay {
    /// Build the provider clients and the HTTP server
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating relay instance");
        let server = server::HttpServer::new(&config)?;
        Ok(Self { server })
    }

    /// Serve until shutdown
    pub async fn run(self) -> Result<()> {
        info!("Starting creative relay on {}", self.server.config().address());
        self.server.start().await
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
