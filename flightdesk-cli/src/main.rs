//! Main entry point for the flightdesk CLI.
//!
//! This is the command-line front-end for the flightdesk reservation store.
//! It provides commands for managing flight reservations:
//! - `book`: Record a new reservation
//! - `list`: List every reservation
//! - `show`: Show one reservation
//! - `edit`: Change fields of a reservation
//! - `delete`: Remove reservations

use clap::Parser;
use flightdesk_cli::cli::{self, Cli};
use flightdesk_cli::utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Route library log records to stderr at the requested verbosity
    let logger = flightdesk::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: could not install logger: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
    };

    let result = match cli.command {
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::Book(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Edit(cmd) => cmd.execute(&global),
        cli::Command::Delete(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::ShowDataDir(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
