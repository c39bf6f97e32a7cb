use clap::{Parser, Subcommand};
use clap_complete::Shell;
use ghscm::shared::logging::LogFormat;

use crate::commands::ScmArgs;

#[derive(Parser)]
#[command(
    name = "ghscm",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable debug logging (overridden by GHSCM_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the effective configuration after all layers and defaults
    Show(ScmArgs),

    /// Resolve the repository identity and fork parent
    Resolve(ScmArgs),

    /// Print JSON Schema for the SCM configuration file
    Schema,

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
