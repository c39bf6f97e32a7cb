//! Centralized reader for GHSCM_* environment variables.
//!
//! Environment variable names are defined as private constants here;
//! external code accesses values through the `EnvVars` struct.

const LOG: &str = "GHSCM_LOG";
const TMP_DIR: &str = "GHSCM_TMP_DIR";

/// Snapshot of all GHSCM_* environment variables at load time.
pub struct EnvVars {
    /// Log filter directives (tracing `EnvFilter` syntax).
    pub log: Option<String>,

    /// Overrides the temporary root under which working copies are placed.
    pub tmp_dir: Option<String>,
}

/// Returns the value of an environment variable, treating empty strings as unset.
pub fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvVars {
    /// Read all GHSCM_* environment variables from the current process.
    pub fn load() -> Self {
        Self {
            log: non_empty_var(LOG),
            tmp_dir: non_empty_var(TMP_DIR),
        }
    }

    /// Returns the env var name for TMP_DIR (used by tests to redirect working copies).
    pub fn tmp_dir_name() -> &'static str {
        TMP_DIR
    }
}
