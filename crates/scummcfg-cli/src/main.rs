mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use commands::{Session, SessionOptions};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = SessionOptions::new(cli.config.as_deref(), cli.game.as_deref(), &cli.overrides);
    let mut session = Session::open(&options).context("Failed to load configuration")?;

    match &cli.command {
        Commands::Get { key, domain, kind } => {
            commands::Get::execute(&session, key, domain.as_deref(), *kind)
                .context("Failed to execute get command")?;
        }
        Commands::Set {
            key,
            value,
            domain,
            dry_run,
        } => {
            commands::Set::execute(&mut session, key, value, domain.as_deref(), *dry_run)
                .context("Failed to execute set command")?;
        }
        Commands::Remove { key, domain } => {
            commands::Remove::execute(&mut session, key, domain)
                .context("Failed to execute remove command")?;
        }
        Commands::Domains { format } => {
            commands::Domains::execute(&session, *format)
                .context("Failed to execute domains command")?;
        }
        Commands::Dump { domain } => {
            commands::Dump::execute(&session, domain.as_deref())
                .context("Failed to execute dump command")?;
        }
        Commands::RenameGame { old, new } => {
            commands::RenameGame::execute(&mut session, old, new)
                .context("Failed to execute rename-game command")?;
        }
        Commands::RemoveGame { name } => {
            commands::RemoveGame::execute(&mut session, name)
                .context("Failed to execute remove-game command")?;
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over the verbosity flag
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
