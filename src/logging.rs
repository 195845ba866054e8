//! Log setup
//!
//! Lifecycle events go through `tracing` to stderr. Player-facing lines
//! ("Victory!", ...) are printed to stdout by the frame loop and are not logs.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber with the configured filter directive.
///
/// An unparsable directive falls back to "info" rather than failing startup.
pub fn init(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
