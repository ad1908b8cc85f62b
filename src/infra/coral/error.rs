//! Coral API error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoralError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Coral API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("GraphQL error: {0}")]
    GraphQL(String),

    #[error("Unexpected response shape: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for CoralError {
    fn from(err: reqwest::Error) -> Self {
        CoralError::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CoralError>;
