//! Coral GraphQL client implementation using reqwest.

use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{CoralError, Result};

/// Internal wrapper for Coral GraphQL responses.
///
/// Used by `query` to strip the `data` wrapper and surface `errors`.
#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQLError {
    message: String,
}

/// Client for one Coral deployment and one persisted query.
///
/// Coral's public endpoint accepts persisted queries over GET: the query text
/// stays empty and `id` names the stored query to run.
pub struct CoralClient {
    client: reqwest::Client,
    api_root: String,
    query_id: String,
}

impl CoralClient {
    pub fn new(api_root: &str, query_id: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CoralError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            api_root: api_root.to_string(),
            query_id: query_id.to_string(),
        })
    }

    /// Run the persisted query with the given variables and deserialize `data`.
    ///
    /// Sends exactly one request. Transport failures, non-2xx statuses,
    /// GraphQL `errors` and undecodable bodies are all returned as errors;
    /// nothing is retried.
    pub async fn query<V, T>(&self, variables: &V) -> Result<T>
    where
        V: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let variables = serde_json::to_string(variables)?;
        tracing::debug!(
            api_root = %self.api_root,
            query_id = %self.query_id,
            %variables,
            "sending coral graphql request"
        );

        let response = self
            .client
            .get(&self.api_root)
            // The endpoint rejects requests without a `query` parameter, even an empty one.
            .query(&[
                ("query", ""),
                ("id", self.query_id.as_str()),
                ("variables", variables.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CoralError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        parse_response(&body)
    }
}

fn parse_response<T: DeserializeOwned>(body: &str) -> Result<T> {
    let response: GraphQLResponse<T> = serde_json::from_str(body)?;

    if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        return Err(CoralError::GraphQL(messages.join(", ")));
    }

    response
        .data
        .ok_or_else(|| CoralError::GraphQL("No data in response".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        value: i64,
    }

    #[rstest]
    fn test_parse_response_unwraps_data() {
        let parsed: Payload = parse_response(r#"{"data": {"value": 3}}"#).unwrap();
        assert_eq!(parsed, Payload { value: 3 });
    }

    #[rstest]
    fn test_parse_response_empty_errors_is_success() {
        let parsed: Payload = parse_response(r#"{"data": {"value": 1}, "errors": []}"#).unwrap();
        assert_eq!(parsed.value, 1);
    }

    #[rstest]
    fn test_parse_response_joins_error_messages() {
        let err = parse_response::<Payload>(
            r#"{"data": null, "errors": [{"message": "first"}, {"message": "second"}]}"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "GraphQL error: first, second");
    }

    #[rstest]
    #[case::null_data(r#"{"data": null}"#)]
    #[case::missing_data("{}")]
    fn test_parse_response_without_data(#[case] body: &str) {
        let err = parse_response::<Payload>(body).unwrap_err();
        assert!(matches!(err, CoralError::GraphQL(ref m) if m == "No data in response"));
    }

    #[rstest]
    #[case::not_json("<html>oops</html>")]
    #[case::wrong_shape(r#"{"data": {"value": "three"}}"#)]
    fn test_parse_response_malformed(#[case] body: &str) {
        let err = parse_response::<Payload>(body).unwrap_err();
        assert!(matches!(err, CoralError::Json(_)));
    }
}
