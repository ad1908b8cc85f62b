use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::dirs;

pub const DEFAULT_API_ROOT: &str = "https://sbnation.coral.coralproject.net/api/graphql";
pub const DEFAULT_QUERY_ID: &str = "c6dcbc1373d9800ab596729e7259e846";

/// Top-level configuration for rollcall.
#[derive(Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Coral endpoint settings.
    #[serde(default)]
    pub fetcher: FetcherConfig,
}

/// Where and how comments are fetched.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FetcherConfig {
    /// Coral GraphQL endpoint.
    #[serde(default = "default_api_root")]
    #[schemars(default = "default_api_root")]
    pub api_root: String,

    /// Id of the persisted query that returns a story's comments.
    #[serde(default = "default_query_id")]
    #[schemars(default = "default_query_id")]
    pub query_id: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            api_root: default_api_root(),
            query_id: default_query_id(),
        }
    }
}

fn default_api_root() -> String {
    DEFAULT_API_ROOT.to_string()
}

fn default_query_id() -> String {
    DEFAULT_QUERY_ID.to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file (permission error, etc.)
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parse error
    #[error("Invalid config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Load configuration from the rollcall config directory.
/// Returns Config::default() if no config file exists.
pub fn load_config() -> anyhow::Result<Config> {
    let Some(dir) = dirs::rollcall_config_dir() else {
        return Ok(Config::default());
    };
    load_config_from_dir(&dir)
}

/// Load configuration from a specific directory.
/// Searches for config.yaml, then config.yml in the given directory.
pub fn load_config_from_dir(dir: &Path) -> anyhow::Result<Config> {
    for filename in &["config.yaml", "config.yml"] {
        let path = dir.join(filename);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "loading config");
                return parse_config(&content, &path);
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(ConfigError::ReadError { path, source: e }.into()),
        }
    }

    Ok(Config::default())
}

fn parse_config(content: &str, path: &Path) -> anyhow::Result<Config> {
    // An empty file deserializes as YAML null.
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(content)
        .map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
        .map_err(Into::into)
}

/// Generate JSON Schema for the Config struct.
pub fn generate_schema() -> schemars::Schema {
    schemars::schema_for!(Config)
}
