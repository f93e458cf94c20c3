//! Delete command implementation.
//!
//! This module implements the `delete` command, which removes one or more
//! reservations by id after an optional confirmation prompt.

use crate::error::CliError;
use crate::utils::{confirm, load_configuration, open_store, GlobalOptions};
use clap::Args;
use flightdesk::{ReservationId, WriteOutcome};

/// Delete one or more reservations.
#[derive(Args)]
pub struct DeleteCommand {
    /// Ids of the reservations to delete
    #[arg(value_name = "ID", required = true, num_args = 1..)]
    pub ids: Vec<ReservationId>,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl DeleteCommand {
    /// Execute the delete command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        if config.confirm_delete() && !self.yes {
            let prompt = format!("Delete {} reservation(s)?", self.ids.len());
            if !confirm(&prompt, &mut std::io::stdin().lock())? {
                eprintln!("Cancelled; nothing deleted.");
                return Ok(());
            }
        }

        let mut deleted = 0usize;
        let mut failed = 0usize;

        for id in &self.ids {
            match store.delete(*id) {
                WriteOutcome::Applied => deleted += 1,
                WriteOutcome::NoMatch => log::warn!("reservation {id} not found"),
                WriteOutcome::Failed => failed += 1,
            }
        }

        if !global.quiet {
            println!("Deleted {deleted} reservation(s)");
        }

        if failed > 0 {
            return Err(CliError::SemanticFailure(format!(
                "Failed to delete {failed} reservation(s)"
            )));
        }

        if deleted == 0 {
            return Err(CliError::SemanticFailure(
                "No reservations deleted".to_string(),
            ));
        }

        Ok(())
    }
}
