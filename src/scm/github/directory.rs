//! Working-copy location.

use std::path::{Path, PathBuf};

use super::error::{GitHubError, Result};
use crate::shared::tmp;

/// Deterministic clone location: `<tmp>/github/<owner>/<repository>`.
pub fn default_directory(owner: &str, repository: &str) -> PathBuf {
    tmp::directory().join("github").join(owner).join(repository)
}

/// Create `path` and all its parents when it does not exist yet.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    create_dir_all(path).map_err(|source| GitHubError::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "created working directory");
    Ok(())
}

#[cfg(unix)]
fn create_dir_all(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    std::fs::DirBuilder::new()
        .recursive(true)
        .mode(0o755)
        .create(path)
}

#[cfg(not(unix))]
fn create_dir_all(path: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path)
}
