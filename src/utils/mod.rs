//! Utility modules for the relay

pub mod error;
pub mod logging;

pub use logging::init_logging;
