use std::path::PathBuf;

use super::env_var::EnvVars;

/// Returns the user's home directory from the HOME environment variable.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Returns the XDG config directory (~/.config or $XDG_CONFIG_HOME).
/// Empty values are treated as unset per XDG Base Directory Specification.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var("XDG_CONFIG_HOME").ok().filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(xdg));
    }
    home_dir().map(|home| home.join(".config"))
}

/// Directory searched for rollcall's config file.
/// `ROLLCALL_CONFIG_DIR` wins over `<config dir>/rollcall`.
pub fn rollcall_config_dir() -> Option<PathBuf> {
    if let Some(dir) = EnvVars::load().config_dir {
        return Some(PathBuf::from(dir));
    }
    config_dir().map(|d| d.join("rollcall"))
}
