//! Centralized reader for ROLLCALL_* environment variables.
//!
//! Environment variable names are defined as private constants here;
//! external code accesses values through the `EnvVars` struct.

const CONFIG_DIR: &str = "ROLLCALL_CONFIG_DIR";
const LOG: &str = "ROLLCALL_LOG";
const RUST_LOG: &str = "RUST_LOG";

/// Snapshot of all ROLLCALL_* environment variables at load time.
#[derive(Debug, Default)]
pub struct EnvVars {
    /// Directory holding config.yaml, replacing `$XDG_CONFIG_HOME/rollcall`.
    pub config_dir: Option<String>,

    /// tracing filter directive, e.g. "debug" or "rollcall=trace".
    /// Falls back to RUST_LOG.
    pub log: Option<String>,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvVars {
    /// Read all ROLLCALL_* environment variables from the current process.
    pub fn load() -> Self {
        Self {
            config_dir: non_empty_var(CONFIG_DIR),
            log: non_empty_var(LOG).or_else(|| non_empty_var(RUST_LOG)),
        }
    }
}
