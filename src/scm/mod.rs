//! Source-control adapters.

pub mod git;
pub mod github;

use std::any::Any;

/// Configuration operations a pipeline host applies to any SCM spec
/// without knowing its concrete kind.
pub trait ScmSpec {
    /// Check mandatory settings, reporting every missing one at once.
    fn validate(&self) -> anyhow::Result<()>;

    /// Overwrite settings with the non-zero values of `child`.
    ///
    /// Fails when `child` is not the same spec type.
    fn merge(&mut self, child: &dyn Any) -> anyhow::Result<()>;

    /// Overwrite settings with non-empty `<prefix>_<FIELD>` environment variables.
    fn merge_from_env(&mut self, prefix: &str);
}
