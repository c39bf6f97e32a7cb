use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// GPG key and passphrase used by the git collaborator to sign commits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GpgSpec {
    /// Armored private key.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub signing_key: String,

    /// Passphrase unlocking the key.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub passphrase: String,
}

impl GpgSpec {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
