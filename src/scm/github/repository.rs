//! Repository identity and fork-parent resolution.

use indoc::indoc;
use serde::{Deserialize, Serialize};

use super::client::GraphQlClient;
use super::error::{GitHubError, Result};

const REPOSITORY_QUERY: &str = indoc! {"
    query($owner: String!, $name: String!) {
        repository(owner: $owner, name: $name) {
            id
            name
            owner {
                login
            }
            parent {
                id
                name
                owner {
                    login
                }
            }
        }
    }
"};

/// Identity of a GitHub repository.
///
/// The parent fields are empty strings when the repository is not a fork.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Repository {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub parent_id: String,
    pub parent_name: String,
    pub parent_owner: String,
}

impl Repository {
    pub fn is_fork(&self) -> bool {
        !self.parent_id.is_empty()
    }
}

/// Variables of [`REPOSITORY_QUERY`].
#[derive(Debug, Serialize)]
struct RepositoryQueryVariables<'a> {
    owner: &'a str,
    name: &'a str,
}

impl<'a> RepositoryQueryVariables<'a> {
    fn new(owner: &'a str, name: &'a str) -> Result<Self> {
        if owner.is_empty() {
            return Err(GitHubError::InvalidVariables("owner is empty".to_string()).into());
        }
        if name.is_empty() {
            return Err(GitHubError::InvalidVariables("name is empty".to_string()).into());
        }
        Ok(Self { owner, name })
    }

    fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| GitHubError::from(e).into())
    }
}

#[derive(Debug, Deserialize)]
struct RepositoryData {
    repository: RepositoryNode,
}

#[derive(Debug, Deserialize)]
struct RepositoryNode {
    id: String,
    name: String,
    owner: OwnerNode,
    parent: Option<ParentNode>,
}

#[derive(Debug, Deserialize)]
struct ParentNode {
    id: String,
    name: String,
    owner: OwnerNode,
}

#[derive(Debug, Deserialize)]
struct OwnerNode {
    login: String,
}

/// Decode the `data` object of [`REPOSITORY_QUERY`].
fn decode(data: serde_json::Value) -> Result<Repository> {
    let data: RepositoryData = serde_json::from_value(data).map_err(GitHubError::from)?;
    let node = data.repository;

    let (parent_id, parent_name, parent_owner) = match node.parent {
        Some(parent) => (parent.id, parent.name, parent.owner.login),
        None => Default::default(),
    };

    Ok(Repository {
        id: node.id,
        name: node.name,
        owner: node.owner.login,
        parent_id,
        parent_name,
        parent_owner,
    })
}

/// Query the identity of `owner/repository` and its fork parent.
///
/// Each call issues a fresh query; failures are logged and returned as-is.
pub async fn resolve(
    client: &dyn GraphQlClient,
    owner: &str,
    repository: &str,
) -> Result<Repository> {
    let variables = RepositoryQueryVariables::new(owner, repository)?.to_json()?;

    let data = match client.query(REPOSITORY_QUERY, variables).await {
        Ok(data) => data,
        Err(err) => {
            tracing::error!(%owner, %repository, error = %err, "repository query failed");
            return Err(err);
        }
    };

    decode(data).inspect_err(|err| {
        tracing::error!(%owner, %repository, error = %err, "unexpected repository response");
    })
}
