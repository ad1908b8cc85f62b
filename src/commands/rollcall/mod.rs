mod api;
mod flatten;
mod format;
pub mod models;
mod stats;
#[cfg(test)]
mod testing;

use clap::Args;
use thiserror::Error;

pub use api::fetch_comments;
pub use flatten::flatten_comments;
pub use format::OutputFormat;
pub use stats::{StatsReport, comment_statistics};

use crate::infra::coral::{CoralClient, CoralError};
use crate::shared::config::{self, FetcherConfig};
use models::SimpleComment;

#[derive(Error, Debug)]
pub enum RollcallError {
    #[error(transparent)]
    Coral(#[from] CoralError),

    #[error("No story found for {0}")]
    StoryNotFound(String),
}

pub type Result<T> = std::result::Result<T, RollcallError>;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct FetchArgs {
    /// URL of the story whose discussion should be read
    pub story_url: String,

    /// Coral GraphQL endpoint [default: from config]
    #[arg(long = "api-root")]
    pub api_root: Option<String>,

    /// Persisted comments query id [default: from config]
    #[arg(long = "query-id")]
    pub query_id: Option<String>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t)]
    pub format: OutputFormat,
}

impl FetchArgs {
    /// Command-line values take precedence over the config file.
    fn resolve(&self, config: FetcherConfig) -> FetcherConfig {
        FetcherConfig {
            api_root: self.api_root.clone().unwrap_or(config.api_root),
            query_id: self.query_id.clone().unwrap_or(config.query_id),
        }
    }

    fn client(&self) -> anyhow::Result<CoralClient> {
        let fetcher = self.resolve(config::load_config()?.fetcher);
        Ok(CoralClient::new(&fetcher.api_root, &fetcher.query_id)?)
    }
}

/// Fetch the discussion for `story_url` and flatten it into pre-order.
pub async fn fetch_flat(client: &CoralClient, story_url: &str) -> Result<Vec<SimpleComment>> {
    let comments = fetch_comments(client, story_url).await?;
    let flat = flatten_comments(&comments);
    tracing::debug!(count = flat.len(), "flattened comments");
    Ok(flat)
}

/// Fetch, flatten and aggregate the discussion for `story_url`.
pub async fn comment_statistics_for(client: &CoralClient, story_url: &str) -> Result<StatsReport> {
    let flat = fetch_flat(client, story_url).await?;
    let report = comment_statistics(&flat);
    tracing::debug!(
        commenters = report.commenters.len(),
        top_comments = report.top_comments.len(),
        "aggregated comment statistics"
    );
    Ok(report)
}

pub async fn run_flat(args: &FetchArgs) -> anyhow::Result<()> {
    let client = args.client()?;
    let comments = fetch_flat(&client, &args.story_url).await?;
    format::print_flat(&comments, args.format)?;
    Ok(())
}

pub async fn run_stats(args: &FetchArgs) -> anyhow::Result<()> {
    let client = args.client()?;
    let report = comment_statistics_for(&client, &args.story_url).await?;
    format::print_stats(&report, args.format)?;
    Ok(())
}
