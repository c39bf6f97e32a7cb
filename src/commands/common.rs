use std::any::Any;
use std::path::PathBuf;

use clap::Args;
use ghscm::scm::github::Github;
use ghscm::shared::config::load_spec;

/// Configuration layers shared by every command that builds an adapter.
#[derive(Args, Clone, PartialEq, Eq)]
pub struct ScmArgs {
    /// YAML file holding the GitHub SCM settings
    #[arg(short, long)]
    pub config: PathBuf,

    /// YAML file whose non-empty settings override the config
    #[arg(long)]
    pub child: Option<PathBuf>,

    /// Environment prefix; e.g. GITHUB reads GITHUB_TOKEN, GITHUB_OWNER, ...
    #[arg(long)]
    pub env_prefix: Option<String>,

    /// Pipeline run identifier (default: random UUID)
    #[arg(long)]
    pub pipeline_id: Option<String>,
}

impl ScmArgs {
    /// Load the layers and construct the adapter.
    pub fn build(&self) -> anyhow::Result<Github> {
        let base = load_spec(&self.config)?;
        let child = self.child.as_deref().map(load_spec).transpose()?;
        let pipeline_id = self
            .pipeline_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        Github::from_layers(
            base,
            child.as_ref().map(|c| c as &dyn Any),
            self.env_prefix.as_deref(),
            &pipeline_id,
        )
    }
}
