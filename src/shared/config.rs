use std::path::{Path, PathBuf};

use crate::scm::github::Spec;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file (permission error, etc.)
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parse error
    #[error("Invalid config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Load a GitHub SCM spec from a YAML file.
pub fn load_spec(path: &Path) -> anyhow::Result<Spec> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_spec(&content, path)
}

/// Parse YAML content into a Spec. An empty document yields the default spec.
fn parse_spec(content: &str, path: &Path) -> anyhow::Result<Spec> {
    if content.trim().is_empty() {
        return Ok(Spec::default());
    }

    serde_yaml::from_str(content)
        .map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
        .map_err(Into::into)
}

/// Generate JSON Schema for the Spec struct.
pub fn generate_schema() -> schemars::Schema {
    schemars::schema_for!(Spec)
}
