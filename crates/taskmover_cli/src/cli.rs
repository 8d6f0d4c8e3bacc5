//! Argument definitions for the `taskmover` binary.

use crate::parse_date;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "taskmover",
    version,
    about = "Carry unchecked tasks from yesterday's daily note into today's"
)]
pub struct Cli {
    /// Log level: trace|debug|info|warn|error (default depends on build mode)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Move unchecked tasks from the previous day's note into today's note
    Move {
        /// Vault root directory
        #[arg(long, default_value = ".")]
        vault: PathBuf,
        /// Settings JSON file (default: <vault>/.taskmover/settings.json)
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Date treated as today, YYYY-MM-DD (default: local today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// Print today's note after moving, regardless of settings
        #[arg(long, conflicts_with = "no_open")]
        open: bool,
        /// Do not print today's note after moving, regardless of settings
        #[arg(long)]
        no_open: bool,
    },
    /// Print the unchecked tasks of a note grouped by heading, as JSON
    Extract {
        /// Note file to scan
        note: PathBuf,
    },
    /// Print a template with tasks from a note substituted in
    Apply {
        /// Template file containing <<tasks>> placeholders
        #[arg(long)]
        template: PathBuf,
        /// Note file to take unchecked tasks from
        #[arg(long)]
        from: PathBuf,
    },
    /// List template notes in the vault matching a query
    Templates {
        /// Case-insensitive path fragment
        query: String,
        /// Vault root directory
        #[arg(long, default_value = ".")]
        vault: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use chrono::NaiveDate;
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn move_parses_date_and_vault() {
        let cli = Cli::parse_from([
            "taskmover",
            "move",
            "--vault",
            "/notes",
            "--date",
            "2024-02-29",
            "--no-open",
        ]);

        match cli.command {
            Command::Move {
                vault,
                date,
                open,
                no_open,
                ..
            } => {
                assert_eq!(vault.to_str(), Some("/notes"));
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29));
                assert!(!open);
                assert!(no_open);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn invalid_date_is_rejected() {
        let result = Cli::try_parse_from(["taskmover", "move", "--date", "2024-13-01"]);
        assert!(result.is_err());
    }

    #[test]
    fn open_flags_conflict() {
        let result = Cli::try_parse_from(["taskmover", "move", "--open", "--no-open"]);
        assert!(result.is_err());
    }
}
