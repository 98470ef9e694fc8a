//! Logging setup
//!
//! Events go to stderr so stdout carries only reports and `--json` output.
//! Debug builds print compact human-readable lines; release builds print one
//! JSON object per event. `RUST_LOG` overrides the configured level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when `RUST_LOG` is not set
pub fn default_directive(log_level: &str) -> String {
    format!("{level},triage_engine={level}", level = log_level)
}

fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(log_level)))
}

/// Install the global subscriber
///
/// Returns `false` if a subscriber was already installed.
pub fn init_telemetry(log_level: &str) -> bool {
    let registry = tracing_subscriber::registry().with(env_filter(log_level));

    #[cfg(debug_assertions)]
    let output = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    #[cfg(not(debug_assertions))]
    let output = fmt::layer()
        .json()
        .with_current_span(true)
        .with_writer(std::io::stderr);

    registry.with(output).try_init().is_ok()
}
