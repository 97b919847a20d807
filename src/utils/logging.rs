//! Logging setup

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Build the filter from the configured directive, falling back to `info`
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_new(config.level.trim()).unwrap_or_else(|e| {
        eprintln!("Invalid log filter '{}' ({}), using info", config.level, e);
        EnvFilter::new("info")
    })
}

/// Install the global tracing subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(config: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(false)
        .with_thread_ids(false);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
