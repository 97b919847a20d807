//! Configuration data models
//!
//! This module defines all configuration structures used throughout the relay.

#![allow(missing_docs)]

pub mod logging;
pub mod provider;
pub mod relay;
pub mod server;

// Re-export all configuration types
pub use logging::*;
pub use provider::*;
pub use relay::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    5000
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    50 * 1024 * 1024 // 50MB, inline base64 images are large
}

/// Default boolean true value
pub fn default_true() -> bool {
    true
}
