//! Git-side settings and the git-operations collaborator seam.
//!
//! Clone, checkout and push are implemented outside this crate. The adapter
//! only stores a [`GitHandler`] and hands it to whoever performs those steps.

mod commit;
mod sign;

use std::path::Path;

pub use commit::CommitSpec;
pub use sign::GpgSpec;

/// HTTP credentials used for git transport.
#[derive(Clone, PartialEq, Eq)]
pub struct GitCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for GitCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Git operations performed on the local working copy.
///
/// Implemented and invoked by the host's git collaborator; [`Github`] only
/// carries the handle and supplies the URL, credentials and directory.
///
/// [`Github`]: crate::scm::github::Github
pub trait GitHandler: Send + Sync {
    /// Clone `url` into `directory`.
    fn clone_repository(
        &self,
        url: &str,
        credentials: &GitCredentials,
        directory: &Path,
    ) -> anyhow::Result<()>;

    /// Check out `branch`, creating it from `remote_branch` when missing.
    fn checkout(
        &self,
        credentials: &GitCredentials,
        branch: &str,
        remote_branch: &str,
        directory: &Path,
    ) -> anyhow::Result<()>;

    /// Push the current branch. Returns true when something was pushed.
    fn push(
        &self,
        credentials: &GitCredentials,
        directory: &Path,
        force: bool,
    ) -> anyhow::Result<bool>;
}
