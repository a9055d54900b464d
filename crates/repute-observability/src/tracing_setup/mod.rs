//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use repute_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV_VAR: &str = "REPUTE_LOG";

/// Filter from `REPUTE_LOG`, else the configured level, else `info`.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global subscriber.
///
/// Logs go to stderr so command output on stdout stays clean. Returns
/// `false` if a subscriber was already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_target(true)
        .with_writer(std::io::stderr);

    if config.json {
        builder
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
            .is_ok()
    } else {
        builder.compact().try_init().is_ok()
    }
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .with_test_writer()
        .try_init()
        .is_ok()
}
