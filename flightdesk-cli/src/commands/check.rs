//! Check command implementation.
//!
//! Runs `SQLite`'s integrity check over the reservations database and
//! reports how many rows it holds.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::Args;
use flightdesk::Database;

/// Check the integrity of the database file.
#[derive(Args)]
pub struct CheckCommand {}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let db = Database::open(store.config().clone())?;
        db.verify_integrity()?;
        let count = Database::count_reservations(db.connection())?;

        if !global.quiet {
            println!(
                "Database OK: {} ({count} reservation(s))",
                store.config().path.display()
            );
        }

        Ok(())
    }
}
