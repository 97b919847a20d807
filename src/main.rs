//! creative-relay - marketing form relay for generative services

#![allow(missing_docs)]

use creative_relay::config::{Config, DEFAULT_CONFIG_PATH};
use creative_relay::server;
use creative_relay::utils::init_logging;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::load(DEFAULT_CONFIG_PATH).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(config.logging());

    // Warnings from loading were emitted before the subscriber existed
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match server::builder::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
