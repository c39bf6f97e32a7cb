use std::path::PathBuf;

use super::env_var::EnvVars;

/// Temporary root under which working copies are placed.
/// Returns `<system temp dir>/ghscm`.
///
/// Can be overridden by setting the `GHSCM_TMP_DIR` environment variable.
pub fn directory() -> PathBuf {
    if let Some(dir) = EnvVars::load().tmp_dir {
        return PathBuf::from(dir);
    }
    std::env::temp_dir().join("ghscm")
}
