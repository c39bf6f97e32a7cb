//! wiremock-based GitHub GraphQL mock server for testing.
//!
//! The server stands in for a GitHub Enterprise instance: its base URL
//! resolves to the enterprise endpoint `<uri>/api/graphql`.
//!
//! ```ignore
//! let mock = GitHubMockServer::start().await;
//!
//! mock.graphql_repository("owner", "repo").get().await;
//! mock.graphql_repository("me", "repo").parent("R_up", "owner", "repo").get().await;
//! mock.graphql_errors(&["Could not resolve to a Repository"]).await;
//! mock.graphql_status(502, "Bad gateway").await;
//! ```

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client::HttpGraphQlClient;
use super::endpoint::GraphQlEndpoint;

pub const TEST_TOKEN: &str = "test-token";

const BEARER: &str = "Bearer test-token";

const GRAPHQL_PATH: &str = "/api/graphql";

pub struct GitHubMockServer {
    server: MockServer,
}

impl GitHubMockServer {
    /// Start a new mock server.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to put in `Spec::url`.
    pub fn url(&self) -> String {
        self.server.uri()
    }

    pub fn endpoint(&self) -> GraphQlEndpoint {
        GraphQlEndpoint::resolve(&self.server.uri()).unwrap()
    }

    /// Get a client bound to this server and authenticated with [`TEST_TOKEN`].
    pub fn client(&self) -> HttpGraphQlClient {
        HttpGraphQlClient::new(&self.endpoint(), TEST_TOKEN).unwrap()
    }

    /// Number of requests the server has seen.
    pub async fn received_requests(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }

    /// Create a repository query mock builder.
    pub fn graphql_repository<'a>(
        &'a self,
        owner: &'a str,
        name: &'a str,
    ) -> MockRepositoryBuilder<'a> {
        MockRepositoryBuilder {
            server: &self.server,
            owner,
            name,
            id: "R_test",
            parent: None,
        }
    }

    /// Respond to any GraphQL request with the given error messages.
    pub async fn graphql_errors(&self, messages: &[&str]) {
        let errors: Vec<_> = messages.iter().map(|m| json!({"message": m})).collect();
        self.graphql_raw(json!({"data": null, "errors": errors}))
            .await;
    }

    /// Respond to any GraphQL request with a non-success status.
    pub async fn graphql_status(&self, status: u16, message: &str) {
        let body = json!({"message": message});
        Mock::given(method("POST"))
            .and(path(GRAPHQL_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Respond to any authenticated GraphQL request with `body`.
    pub async fn graphql_raw(&self, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path(GRAPHQL_PATH))
            .and(header("authorization", BEARER))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }
}

/// Builder for the repository identity query.
pub struct MockRepositoryBuilder<'a> {
    server: &'a MockServer,
    owner: &'a str,
    name: &'a str,
    id: &'a str,
    parent: Option<(&'a str, &'a str, &'a str)>,
}

impl<'a> MockRepositoryBuilder<'a> {
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = id;
        self
    }

    /// Make the repository a fork of `parent_owner/parent_name`.
    pub fn parent(
        mut self,
        parent_id: &'a str,
        parent_owner: &'a str,
        parent_name: &'a str,
    ) -> Self {
        self.parent = Some((parent_id, parent_owner, parent_name));
        self
    }

    /// Mock a successful query matching this owner and name.
    pub async fn get(self) {
        let parent = match self.parent {
            Some((id, owner, name)) => json!({
                "id": id,
                "name": name,
                "owner": {"login": owner}
            }),
            None => serde_json::Value::Null,
        };

        Mock::given(method("POST"))
            .and(path(GRAPHQL_PATH))
            .and(header("authorization", BEARER))
            .and(body_partial_json(json!({
                "variables": {"owner": self.owner, "name": self.name}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "repository": {
                        "id": self.id,
                        "name": self.name,
                        "owner": {"login": self.owner},
                        "parent": parent
                    }
                }
            })))
            .mount(self.server)
            .await;
    }
}
