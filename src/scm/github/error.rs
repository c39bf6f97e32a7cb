//! GitHub SCM error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("github parameter(s) required: [{}]", .0.join(","))]
    MissingParameters(Vec<&'static str>),

    #[error("unable to merge GitHub spec with unknown object type")]
    MergeType,

    #[error("invalid GraphQL endpoint for {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("invalid query variables: {0}")]
    InvalidVariables(String),

    #[error("GitHub API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GitHub API returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("GraphQL error: {0}")]
    GraphQL(String),

    #[error("unexpected GraphQL response shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to create directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = anyhow::Result<T>;
