mod cli;
mod commands;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Cli {
        verbose,
        log_format,
        command,
    } = Cli::parse();

    ghscm::shared::logging::init(verbose, log_format);

    match command {
        Commands::Show(args) => commands::show::run(&args)?,
        Commands::Resolve(args) => commands::resolve::run(&args)?,
        Commands::Schema => commands::schema::run()?,
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "ghscm", &mut std::io::stdout());
        }
    }

    Ok(())
}
