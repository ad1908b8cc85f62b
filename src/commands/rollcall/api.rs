use serde::{Deserialize, Serialize};

use super::models::CommentConnection;
use super::{Result, RollcallError};
use crate::infra::coral::CoralClient;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StoryVariables<'a> {
    #[serde(rename = "storyURL")]
    story_url: &'a str,
    /// Asks Coral to pre-flatten deep reply chains. Nested `replies` can
    /// still show up in the response.
    flatten_replies: bool,
}

#[derive(Debug, Deserialize)]
struct StoryData {
    story: Option<Story>,
}

#[derive(Debug, Deserialize)]
struct Story {
    comments: CommentConnection,
}

/// Fetch the comment tree of the discussion attached to `story_url`.
pub async fn fetch_comments(client: &CoralClient, story_url: &str) -> Result<CommentConnection> {
    let variables = StoryVariables {
        story_url,
        flatten_replies: true,
    };

    let data: StoryData = client.query(&variables).await?;
    let story = data
        .story
        .ok_or_else(|| RollcallError::StoryNotFound(story_url.to_string()))?;

    tracing::info!(
        story_url,
        top_level = story.comments.edges.len(),
        "fetched comments"
    );

    Ok(story.comments)
}
