//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BookCommand, CheckCommand, CompletionsCommand, DeleteCommand, EditCommand, InitCommand,
    ListCommand, ShowCommand, ShowDataDirCommand,
};
use clap::{Parser, Subcommand};
use flightdesk::config::MAX_LOCK_WAIT_SECONDS;
use std::path::PathBuf;

/// Command-line tool for recording and managing flight reservations.
#[derive(Parser)]
#[command(name = "flightdesk")]
#[command(version, about = "Record and manage flight reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "FLIGHTDESK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the busy timeout (in seconds)
    #[arg(
        long,
        value_name = "SECONDS",
        global = true,
        env = "FLIGHTDESK_BUSY_TIMEOUT",
        value_parser = clap::value_parser!(u32).range(1..=MAX_LOCK_WAIT_SECONDS as i64)
    )]
    pub busy_timeout: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create the data directory and reservations table
    Init(InitCommand),

    /// Book a new reservation
    Book(BookCommand),

    /// List all reservations
    List(ListCommand),

    /// Show a single reservation
    Show(ShowCommand),

    /// Change fields of an existing reservation
    Edit(EditCommand),

    /// Delete one or more reservations
    Delete(DeleteCommand),

    /// Check the integrity of the database file
    Check(CheckCommand),

    /// Show the resolved data directory path
    ShowDataDir(ShowDataDirCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_book_with_globals() {
        let cli = Cli::try_parse_from([
            "flightdesk",
            "--quiet",
            "book",
            "--name",
            "Ada Lovelace",
            "--date",
            "2024-03-01",
            "--data-dir",
            "/tmp/fd",
        ])
        .unwrap();

        assert!(cli.quiet);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/fd")));
        match cli.command {
            Command::Book(cmd) => {
                assert_eq!(cmd.fields.name.as_deref(), Some("Ada Lovelace"));
                assert_eq!(cmd.fields.seat_number, None);
            }
            _ => panic!("expected book command"),
        }
    }

    #[test]
    fn test_busy_timeout_bounds() {
        let parse =
            |secs: &str| Cli::try_parse_from(["flightdesk", "--busy-timeout", secs, "list"]);

        assert_eq!(parse("1").unwrap().busy_timeout, Some(1));
        assert_eq!(parse("3600").unwrap().busy_timeout, Some(3600));
        assert!(parse("0").is_err());
        assert!(parse("3601").is_err());
        assert!(parse("4000000").is_err());
    }

    #[test]
    fn test_parse_delete_requires_id() {
        assert!(Cli::try_parse_from(["flightdesk", "delete"]).is_err());
        assert!(Cli::try_parse_from(["flightdesk", "delete", "abc"]).is_err());

        let cli = Cli::try_parse_from(["flightdesk", "delete", "1", "2", "--yes"]).unwrap();
        match cli.command {
            Command::Delete(cmd) => {
                assert_eq!(cmd.ids.len(), 2);
                assert!(cmd.yes);
            }
            _ => panic!("expected delete command"),
        }
    }
}
