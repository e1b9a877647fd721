//! CLI argument parsing for the `rollover` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Keep a current/previous pair of a daily artifact and alert when it is saved.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "rollover")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML config file. Defaults are used when omitted.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines instead of human-readable text.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run one store cycle now.
    Store(StoreArgs),
    /// Run a store cycle every day at the configured time.
    Run(RunArgs),
    /// Show which artifacts exist.
    Status,
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct StoreArgs {
    /// File to store as the new current artifact (overrides artifact.source).
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    /// File to store on every cycle (overrides artifact.source).
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Stop after this many cycles instead of running until Ctrl-C.
    #[arg(long)]
    pub max_cycles: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_store_with_input() {
        let cli = Cli::try_parse_from(["rollover", "store", "--input", "data.csv"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Store(StoreArgs {
                input: Some(PathBuf::from("data.csv"))
            })
        );
        assert_eq!(cli.config, None);
        assert!(!cli.log_json);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "rollover",
            "run",
            "--max-cycles",
            "2",
            "--config",
            "rollover.toml",
            "--log-json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("rollover.toml")));
        assert!(cli.log_json);
        assert_eq!(
            cli.command,
            Command::Run(RunArgs {
                input: None,
                max_cycles: Some(2)
            })
        );
    }

    #[test]
    fn status_takes_no_arguments() {
        let cli = Cli::try_parse_from(["rollover", "status"]).unwrap();
        assert_eq!(cli.command, Command::Status);
        assert!(Cli::try_parse_from(["rollover", "status", "--input", "x"]).is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["rollover"]).is_err());
    }
}
