//! Commit message settings shared by every target linked to one SCM.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Conventional-commit style message settings.
///
/// Rendering the final message is done by the git collaborator; this crate
/// only carries and merges the settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CommitSpec {
    /// Commit type, e.g. "chore" or "fix".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub r#type: String,

    /// Commit scope.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub scope: String,

    /// Footers appended after the body.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub footers: String,

    /// Commit title. Defaults to the target description when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Drop the generated credit line from the body.
    #[serde(default, skip_serializing_if = "is_false")]
    pub hide_credit: bool,

    /// Commit body.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,
}

impl CommitSpec {
    /// True when every field holds its zero value.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
