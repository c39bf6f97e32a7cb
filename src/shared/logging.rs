//! tracing subscriber setup for the binary.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use super::env_var::EnvVars;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Filter directives: `GHSCM_LOG` when set, otherwise `warn` (`debug` when verbose).
fn filter_directives(env_log: Option<String>, verbose: bool) -> String {
    env_log.unwrap_or_else(|| {
        if verbose {
            "ghscm=debug,warn".to_string()
        } else {
            "warn".to_string()
        }
    })
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: bool, format: LogFormat) {
    let directives = filter_directives(EnvVars::load().log, verbose);
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_current_span(true)
                    .with_target(true),
            )
            .try_init(),
    };

    if let Err(err) = result {
        eprintln!("warning: logging already initialized: {err}");
    }
}
