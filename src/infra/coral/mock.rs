//! wiremock-based Coral mock server for testing.
//!
//! ```ignore
//! let mock = CoralMockServer::start().await;
//! mock.story_comments(STORY_URL, json!([...])).await;
//! let client = mock.client();
//! ```

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client::CoralClient;

const TEST_QUERY_ID: &str = "test-query-id";
const GRAPHQL_PATH: &str = "/api/graphql";

pub struct CoralMockServer {
    server: MockServer,
}

impl CoralMockServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn api_root(&self) -> String {
        format!("{}{GRAPHQL_PATH}", self.server.uri())
    }

    pub fn query_id(&self) -> &'static str {
        TEST_QUERY_ID
    }

    /// Get a CoralClient configured to use this mock server.
    pub fn client(&self) -> CoralClient {
        CoralClient::new(&self.api_root(), TEST_QUERY_ID).unwrap()
    }

    /// Mock the persisted comments query for `story_url`, answering with the
    /// given top-level `edges` array.
    pub async fn story_comments(&self, story_url: &str, edges: serde_json::Value) {
        let body = json!({
            "data": {
                "story": {
                    "id": "story-1",
                    "comments": { "edges": edges }
                }
            }
        });
        self.respond(story_url, ResponseTemplate::new(200).set_body_json(body))
            .await;
    }

    /// Mock a response with arbitrary JSON for `story_url`.
    pub async fn raw_json(&self, story_url: &str, body: serde_json::Value) {
        self.respond(story_url, ResponseTemplate::new(200).set_body_json(body))
            .await;
    }

    /// Mock a non-JSON or error response for `story_url`.
    pub async fn raw_status(&self, story_url: &str, status: u16, body: &str) {
        self.respond(
            story_url,
            ResponseTemplate::new(status).set_body_string(body.to_string()),
        )
        .await;
    }

    async fn respond(&self, story_url: &str, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(GRAPHQL_PATH))
            .and(query_param("query", ""))
            .and(query_param("id", TEST_QUERY_ID))
            .and(query_param("variables", expected_variables(story_url)))
            .respond_with(template)
            .expect(1)
            .mount(&self.server)
            .await;
    }
}

fn expected_variables(story_url: &str) -> String {
    format!(
        r#"{{"storyURL":{},"flattenReplies":true}}"#,
        json!(story_url)
    )
}

/// JSON for one comment edge as Coral returns it.
pub fn comment_edge(author: &str, recs: u64, body: &str) -> serde_json::Value {
    json!({
        "node": {
            "id": format!("comment-{author}-{recs}"),
            "body": body,
            "createdAt": "2024-01-01T00:00:00Z",
            "author": { "id": format!("user-{author}"), "username": author },
            "actionCounts": { "reaction": { "total": recs } }
        }
    })
}

/// Same as `comment_edge` with a `replies.edges` list attached.
pub fn comment_edge_with_replies(
    author: &str,
    recs: u64,
    body: &str,
    replies: Vec<serde_json::Value>,
) -> serde_json::Value {
    let mut edge = comment_edge(author, recs, body);
    edge["node"]["replies"] = json!({ "edges": replies });
    edge
}
