use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// ScummVM configuration domain tool
///
/// Read and edit the layered ScummVM config file: global settings, per-game
/// domains and session overrides
#[derive(Parser, Debug)]
#[command(name = "scummcfg")]
#[command(about, long_about = None, version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use specific config file (default: platform config location)
    #[arg(long, global = true, value_name = "PATH", env = "SCUMMCFG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Select the active game domain
    #[arg(short, long, global = true, value_name = "NAME")]
    pub game: Option<String>,

    /// Session override, never written to the file (repeatable)
    #[arg(
        long = "override",
        global = true,
        value_name = "KEY=VALUE",
        value_parser = parse_override
    )]
    pub overrides: Vec<(String, String)>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved value of a key
    Get {
        /// Key to look up
        key: String,

        /// Start the lookup at this domain instead of the active one
        #[arg(short, long)]
        domain: Option<String>,

        /// Interpret the value
        #[arg(long = "as", value_enum, default_value = "text")]
        kind: ValueKind,
    },

    /// Store a value and save the file
    Set {
        /// Key to store
        key: String,

        /// Value to store; an empty value removes the key from the file
        value: String,

        /// Target domain (default: active game, else the application domain)
        #[arg(short, long)]
        domain: Option<String>,

        /// Show the change as a diff without saving
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove a key from one domain and save the file
    Remove {
        /// Key to remove
        key: String,

        /// Domain to remove it from
        #[arg(short, long)]
        domain: String,
    },

    /// List global and game domains
    Domains {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the config file as it would be saved, or one domain's keys
    Dump {
        /// Only print this domain
        #[arg(short, long)]
        domain: Option<String>,
    },

    /// Rename a game domain, merging into the target if it exists
    RenameGame {
        /// Current name
        old: String,
        /// New name
        new: String,
    },

    /// Delete a game domain
    RemoveGame {
        /// Game domain to delete
        name: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ValueKind {
    /// Raw string value
    Text,
    /// Integer
    Int,
    /// Boolean (true/yes/1, false/no/0)
    Bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    Text,
    /// JSON document
    Json,
}

fn parse_override(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{raw}'"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_override() {
        assert_eq!(
            parse_override("fullscreen=true").unwrap(),
            ("fullscreen".to_string(), "true".to_string())
        );
        assert_eq!(
            parse_override(" path = a=b ").unwrap(),
            ("path".to_string(), "a=b".to_string())
        );
        assert!(parse_override("novalue").is_err());
        assert!(parse_override("=x").is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
