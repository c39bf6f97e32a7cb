//! Base URL normalization and GraphQL endpoint selection.

use reqwest::Url;

use super::error::{GitHubError, Result};

/// Public SaaS host.
pub const PUBLIC_HOST: &str = "github.com";

/// GraphQL endpoint of the public SaaS offering.
pub const PUBLIC_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// GraphQL path of a GitHub Enterprise Server instance, relative to its base URL.
const ENTERPRISE_GRAPHQL_PATH: &str = "api/graphql";

/// Default the URL to the public host and make sure it carries a scheme.
pub fn normalize_url(url: &str) -> String {
    let url = if url.is_empty() { PUBLIC_HOST } else { url };

    if url.starts_with("https://") || url.starts_with("http://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// GraphQL endpoint the query capability is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphQlEndpoint {
    /// github.com
    Public,
    /// GitHub Enterprise Server, which serves GraphQL under `/api/graphql`.
    Enterprise(Url),
}

impl GraphQlEndpoint {
    /// Select the endpoint for an already normalized base URL.
    pub fn resolve(url: &str) -> Result<Self> {
        let invalid = |reason: String| GitHubError::InvalidEndpoint {
            url: url.to_string(),
            reason,
        };

        let mut parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;

        if parsed.host_str() == Some(PUBLIC_HOST) {
            tracing::debug!(%url, "using public GraphQL endpoint");
            return Ok(Self::Public);
        }

        if parsed.cannot_be_a_base() {
            return Err(invalid("URL cannot carry a path".to_string()).into());
        }

        let base = parsed.path().trim_end_matches('/').to_string();
        parsed.set_path(&format!("{base}/{ENTERPRISE_GRAPHQL_PATH}"));
        parsed.set_query(None);
        parsed.set_fragment(None);

        tracing::debug!(%url, endpoint = %parsed, "using enterprise GraphQL endpoint");
        Ok(Self::Enterprise(parsed))
    }

    /// Full endpoint URL.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Public => PUBLIC_GRAPHQL_URL,
            Self::Enterprise(url) => url.as_str(),
        }
    }

    pub fn is_enterprise(&self) -> bool {
        matches!(self, Self::Enterprise(_))
    }
}

impl std::fmt::Display for GraphQlEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
