//! GitHub SCM adapter: the validated, ready-to-use view of one SCM block.

use std::any::Any;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::client::{GraphQlClient, HttpGraphQlClient};
use super::directory::{default_directory, ensure_directory};
use super::endpoint::{GraphQlEndpoint, normalize_url};
use super::error::Result;
use super::repository::{self, Repository};
use super::spec::Spec;
use crate::scm::ScmSpec;
use crate::scm::git::{GitCredentials, GitHandler};

const DEFAULT_BRANCH: &str = "main";

/// Mutable state shared with collaborators reading the adapter concurrently.
#[derive(Debug, Default)]
struct ScmState {
    last_resolved: Option<Repository>,
}

/// GitHub repository bound to one pipeline run.
///
/// Only constructed from a valid spec; every field except the state slot is
/// fixed for the adapter's lifetime. Share it as `Arc<Github>`.
pub struct Github {
    spec: Spec,
    pipeline_id: String,
    endpoint: GraphQlEndpoint,
    client: Arc<dyn GraphQlClient>,
    git: Option<Arc<dyn GitHandler>>,
    state: RwLock<ScmState>,
}

impl Github {
    /// Validate `spec`, fill its defaults and bind an HTTP GraphQL client
    /// authenticated with the spec token.
    pub fn new(spec: Spec, pipeline_id: &str) -> Result<Self> {
        Self::build(spec, pipeline_id, |endpoint, spec| {
            let client = HttpGraphQlClient::new(endpoint, &spec.token)?;
            Ok(Arc::new(client))
        })
    }

    /// Same as [`Github::new`] with a caller-supplied query capability.
    pub fn with_client(
        spec: Spec,
        pipeline_id: &str,
        client: Arc<dyn GraphQlClient>,
    ) -> Result<Self> {
        Self::build(spec, pipeline_id, |_, _| Ok(client))
    }

    /// Apply the configuration layers, then construct the adapter.
    ///
    /// Order: `child` merged over `base`, then `<env_prefix>_*` variables
    /// (which win over the child), then defaults for fields still empty.
    pub fn from_layers(
        mut base: Spec,
        child: Option<&dyn Any>,
        env_prefix: Option<&str>,
        pipeline_id: &str,
    ) -> Result<Self> {
        if let Some(child) = child {
            ScmSpec::merge(&mut base, child)?;
        }
        if let Some(prefix) = env_prefix {
            base.merge_from_env(prefix);
        }
        Self::new(base, pipeline_id)
    }

    fn build(
        mut spec: Spec,
        pipeline_id: &str,
        make_client: impl FnOnce(&GraphQlEndpoint, &Spec) -> Result<Arc<dyn GraphQlClient>>,
    ) -> Result<Self> {
        spec.validate()?;

        if spec.directory.is_empty() {
            spec.directory = default_directory(&spec.owner, &spec.repository)
                .to_string_lossy()
                .into_owned();
        }
        if spec.branch.is_empty() {
            spec.branch = DEFAULT_BRANCH.to_string();
        }
        spec.url = normalize_url(&spec.url);

        let endpoint = GraphQlEndpoint::resolve(&spec.url)?;
        let client = make_client(&endpoint, &spec)?;

        // The git collaborator creates the directory on clone if this fails.
        if let Err(err) = ensure_directory(Path::new(&spec.directory)) {
            tracing::error!(error = %err, "unable to prepare working directory");
        }

        Ok(Self {
            spec,
            pipeline_id: pipeline_id.to_string(),
            endpoint,
            client,
            git: None,
            state: RwLock::default(),
        })
    }

    /// Attach the git-operations collaborator.
    pub fn with_git_handler(mut self, git: Arc<dyn GitHandler>) -> Self {
        self.git = Some(git);
        self
    }

    /// Effective spec, defaults applied.
    pub fn spec(&self) -> &Spec {
        &self.spec
    }

    pub fn pipeline_id(&self) -> &str {
        &self.pipeline_id
    }

    /// Local working copy.
    pub fn directory(&self) -> &Path {
        Path::new(&self.spec.directory)
    }

    /// Normalized base URL.
    pub fn url(&self) -> &str {
        &self.spec.url
    }

    pub fn endpoint(&self) -> &GraphQlEndpoint {
        &self.endpoint
    }

    pub fn client(&self) -> &Arc<dyn GraphQlClient> {
        &self.client
    }

    pub fn git_handler(&self) -> Option<&Arc<dyn GitHandler>> {
        self.git.as_ref()
    }

    /// HTTPS clone URL of the configured repository.
    pub fn repository_url(&self) -> String {
        format!(
            "{}/{}/{}.git",
            self.spec.url.trim_end_matches('/'),
            self.spec.owner,
            self.spec.repository
        )
    }

    /// Credentials for git transport: the configured username and the API token.
    pub fn git_credentials(&self) -> GitCredentials {
        GitCredentials {
            username: self.spec.username.clone(),
            password: self.spec.token.clone(),
        }
    }

    /// Resolve the configured repository's identity and fork parent.
    ///
    /// Always queries; the result is also kept for [`Github::last_resolved`].
    pub async fn repository_identity(&self) -> Result<Repository> {
        let resolved = repository::resolve(
            self.client.as_ref(),
            &self.spec.owner,
            &self.spec.repository,
        )
        .await?;

        self.state.write().await.last_resolved = Some(resolved.clone());
        Ok(resolved)
    }

    /// Most recent successful [`Github::repository_identity`] result.
    pub async fn last_resolved(&self) -> Option<Repository> {
        self.state.read().await.last_resolved.clone()
    }
}

impl std::fmt::Debug for Github {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Github")
            .field("spec", &self.spec.redacted())
            .field("pipeline_id", &self.pipeline_id)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
