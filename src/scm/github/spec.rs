//! GitHub SCM configuration and its merge layers.

use std::any::Any;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::error::{GitHubError, Result};
use crate::scm::ScmSpec;
use crate::scm::git::{CommitSpec, GpgSpec};
use crate::shared::env_var::non_empty_var;

const REDACTED: &str = "********";

/// Settings of one GitHub SCM block in a pipeline manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Spec {
    /// Git branch to work on (default: "main").
    ///
    /// Sources and conditions read files from this branch. Targets create a
    /// working branch based on it.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub branch: String,

    /// Local path where the repository is cloned
    /// (default: "<tmp>/ghscm/github/<owner>/<repository>").
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub directory: String,

    /// Email used to commit changes.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,

    /// Owner (user or organization) of the repository. Required.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub owner: String,

    /// Repository name. Required.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub repository: String,

    /// Token used to authenticate with the GitHub API. Required.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token: String,

    /// GitHub host, either github.com or a GitHub Enterprise URL
    /// (default: "github.com").
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,

    /// Username used to authenticate git transport.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub username: String,

    /// User associated with new commits.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user: String,

    /// GPG key and passphrase used for commit signing.
    #[serde(default, skip_serializing_if = "GpgSpec::is_empty")]
    pub gpg: GpgSpec,

    /// Run `git push --force` during the push phase (default: false).
    #[serde(default, skip_serializing_if = "is_false")]
    pub force: bool,

    /// Settings used to generate the final commit message.
    /// Applies to every target linked to this SCM.
    #[serde(default, skip_serializing_if = "CommitSpec::is_empty")]
    pub commit_message: CommitSpec,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn overwrite_if_set(target: &mut String, value: &str) {
    if !value.is_empty() {
        *target = value.to_string();
    }
}

impl Spec {
    /// Check that token, owner and repository are set.
    ///
    /// Every missing field is reported in a single error, in the order
    /// token, owner, repository.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.token.is_empty() {
            missing.push("token");
        }
        if self.owner.is_empty() {
            missing.push("owner");
        }
        if self.repository.is_empty() {
            missing.push("repository");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(GitHubError::MissingParameters(missing).into())
        }
    }

    /// Overwrite fields with the non-zero values of `child`.
    pub fn merge_spec(&mut self, child: &Spec) {
        overwrite_if_set(&mut self.branch, &child.branch);
        if !child.commit_message.is_empty() {
            self.commit_message = child.commit_message.clone();
        }
        overwrite_if_set(&mut self.directory, &child.directory);
        overwrite_if_set(&mut self.email, &child.email);
        if child.force {
            self.force = true;
        }
        if !child.gpg.is_empty() {
            self.gpg = child.gpg.clone();
        }
        overwrite_if_set(&mut self.owner, &child.owner);
        overwrite_if_set(&mut self.repository, &child.repository);
        overwrite_if_set(&mut self.token, &child.token);
        overwrite_if_set(&mut self.url, &child.url);
        overwrite_if_set(&mut self.user, &child.user);
        overwrite_if_set(&mut self.username, &child.username);
    }

    /// Copy of the spec with secrets masked, suitable for display.
    pub fn redacted(&self) -> Spec {
        let mut spec = self.clone();
        if !spec.token.is_empty() {
            spec.token = REDACTED.to_string();
        }
        if !spec.gpg.passphrase.is_empty() {
            spec.gpg.passphrase = REDACTED.to_string();
        }
        if !spec.gpg.signing_key.is_empty() {
            spec.gpg.signing_key = REDACTED.to_string();
        }
        spec
    }
}

impl ScmSpec for Spec {
    fn validate(&self) -> anyhow::Result<()> {
        Spec::validate(self)
    }

    fn merge(&mut self, child: &dyn Any) -> anyhow::Result<()> {
        let child = child.downcast_ref::<Spec>().ok_or(GitHubError::MergeType)?;
        self.merge_spec(child);
        Ok(())
    }

    // Environment values win even over fields that are already set.
    fn merge_from_env(&mut self, prefix: &str) {
        let fields: [(&str, &mut String); 9] = [
            ("BRANCH", &mut self.branch),
            ("DIRECTORY", &mut self.directory),
            ("EMAIL", &mut self.email),
            ("OWNER", &mut self.owner),
            ("REPOSITORY", &mut self.repository),
            ("TOKEN", &mut self.token),
            ("URL", &mut self.url),
            ("USERNAME", &mut self.username),
            ("USER", &mut self.user),
        ];

        for (name, field) in fields {
            if let Some(value) = non_empty_var(&format!("{prefix}_{name}")) {
                *field = value;
            }
        }
    }
}
