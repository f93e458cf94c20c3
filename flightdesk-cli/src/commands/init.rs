//! Init command implementation.
//!
//! This module implements the `init` command for explicitly creating the
//! data directory and the reservations table. Every other command does the
//! same bootstrap implicitly.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::Args;

/// Create the data directory and reservations table.
#[derive(Args)]
pub struct InitCommand {}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        if !global.quiet {
            println!(
                "Initialized reservations database: {}",
                store.config().path.display()
            );
        }

        Ok(())
    }
}
