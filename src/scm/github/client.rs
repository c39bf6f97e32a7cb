//! GraphQL query capability and its HTTP implementation.

use serde::Deserialize;

use super::endpoint::GraphQlEndpoint;
use super::error::{GitHubError, Result};

const USER_AGENT: &str = concat!("ghscm/", env!("CARGO_PKG_VERSION"));

/// Executes one GraphQL document and returns its `data` object.
///
/// Bound to a single endpoint and credential at construction. Implementations
/// perform no retries.
#[async_trait::async_trait]
pub trait GraphQlClient: Send + Sync {
    async fn query(&self, query: &str, variables: serde_json::Value) -> Result<serde_json::Value>;
}

/// GitHub GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<serde_json::Value>,
    errors: Option<Vec<GraphQlError>>,
}

/// GraphQL error returned by GitHub API.
#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Token-authenticated client posting to a GitHub GraphQL endpoint.
pub struct HttpGraphQlClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl HttpGraphQlClient {
    pub fn new(endpoint: &GraphQlEndpoint, token: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(GitHubError::from)?;

        Ok(Self {
            http,
            endpoint: endpoint.as_str().to_string(),
            token: token.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for HttpGraphQlClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGraphQlClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl GraphQlClient for HttpGraphQlClient {
    async fn query(&self, query: &str, variables: serde_json::Value) -> Result<serde_json::Value> {
        let body = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(GitHubError::from)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(GitHubError::from)?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).trim().to_string();
            return Err(GitHubError::Status { status, body }.into());
        }

        let response: GraphQlResponse =
            serde_json::from_slice(&bytes).map_err(GitHubError::from)?;

        if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            return Err(GitHubError::GraphQL(messages.join(", ")).into());
        }

        response
            .data
            .ok_or_else(|| GitHubError::GraphQL("No data in response".to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scm::github::mock::GitHubMockServer;
    use serde_json::json;

    #[tokio::test]
    async fn query_returns_data_object() {
        let mock = GitHubMockServer::start().await;
        mock.graphql_repository("acme", "widgets").get().await;

        let data = mock
            .client()
            .query(
                "query { repository { id } }",
                json!({"owner": "acme", "name": "widgets"}),
            )
            .await
            .unwrap();

        assert_eq!(data["repository"]["name"], "widgets");
    }

    #[tokio::test]
    async fn query_surfaces_graphql_errors() {
        let mock = GitHubMockServer::start().await;
        mock.graphql_errors(&["Could not resolve to a Repository", "rate limited"])
            .await;

        let err = mock
            .client()
            .query("query {}", json!({}))
            .await
            .unwrap_err();

        match err.downcast_ref::<GitHubError>() {
            Some(GitHubError::GraphQL(message)) => {
                assert_eq!(message, "Could not resolve to a Repository, rate limited");
            }
            other => panic!("expected GraphQL error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn query_reports_http_status() {
        let mock = GitHubMockServer::start().await;
        mock.graphql_status(401, "Bad credentials").await;

        let err = mock
            .client()
            .query("query {}", json!({}))
            .await
            .unwrap_err();

        match err.downcast_ref::<GitHubError>() {
            Some(GitHubError::Status { status, body }) => {
                assert_eq!(*status, reqwest::StatusCode::UNAUTHORIZED);
                assert_eq!(body, "Bad credentials");
            }
            other => panic!("expected Status error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn query_rejects_missing_data() {
        let mock = GitHubMockServer::start().await;
        mock.graphql_raw(json!({})).await;

        let err = mock
            .client()
            .query("query {}", json!({}))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "GraphQL error: No data in response");
    }

    #[tokio::test]
    async fn query_fails_on_wrong_token() {
        let mock = GitHubMockServer::start().await;
        mock.graphql_repository("acme", "widgets").get().await;

        let client = HttpGraphQlClient::new(&mock.endpoint(), "other-token").unwrap();
        let err = client.query("query {}", json!({})).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<GitHubError>(),
            Some(GitHubError::Status { .. })
        ));
    }

    #[tokio::test]
    async fn query_keeps_transport_cause() {
        // Nothing listens on the discard port.
        let endpoint = GraphQlEndpoint::resolve("http://127.0.0.1:9").unwrap();
        let client = HttpGraphQlClient::new(&endpoint, "token").unwrap();

        let err = client.query("query {}", json!({})).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<GitHubError>(),
            Some(GitHubError::Transport(_))
        ));
        let cause = err
            .chain()
            .find_map(|e| e.downcast_ref::<reqwest::Error>())
            .unwrap();
        assert!(cause.is_connect() || cause.is_request(), "got: {cause:?}");
    }

    #[test]
    fn debug_hides_token() {
        let client = HttpGraphQlClient::new(&GraphQlEndpoint::Public, "ghp_secret").unwrap();
        let rendered = format!("{client:?}");
        assert!(rendered.contains("api.github.com/graphql"));
        assert!(!rendered.contains("ghp_secret"));
    }
}
