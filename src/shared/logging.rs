//! tracing subscriber setup.
//!
//! Logs go to stderr so stdout only carries the report.

use tracing_subscriber::EnvFilter;

use super::env_var::EnvVars;

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber.
///
/// A failure (another subscriber is already set) is reported on stderr and
/// leaves the existing subscriber in place; it never aborts the command.
pub fn init() {
    if let Err(e) = try_init() {
        eprintln!("rollcall: logging not initialized: {e}");
    }
}

fn try_init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = build_filter(EnvVars::load().log.as_deref());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}

/// Parse `directives`, falling back to the default filter when absent or invalid.
fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
