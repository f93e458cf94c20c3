//! Edit command implementation.
//!
//! This module implements the `edit` command. The supplied flags are laid
//! over the stored record, the result is validated as a whole, and all six
//! fields are written back.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, FieldArgs, GlobalOptions};
use clap::Args;
use flightdesk::{Error, ReservationId, WriteOutcome};

/// Change fields of an existing reservation.
#[derive(Args)]
pub struct EditCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: ReservationId,

    #[command(flatten)]
    pub fields: FieldArgs,
}

impl EditCommand {
    /// Execute the edit command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.fields.is_empty() {
            return Err(CliError::InvalidArguments(
                "nothing to change; pass at least one field flag".to_string(),
            ));
        }

        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let not_found = || Error::NotFound {
            resource: format!("reservation {}", self.id),
        };

        let current = store.get_by_id(self.id).ok_or_else(not_found)?;
        let updated = self.fields.overlay(&current.fields);
        updated.validate()?;

        match store.update(self.id, &updated) {
            WriteOutcome::Applied => {
                if !global.quiet {
                    println!("Updated reservation {}", self.id);
                }
                Ok(())
            }
            // Deleted between the lookup and the update
            WriteOutcome::NoMatch => Err(not_found().into()),
            WriteOutcome::Failed => Err(CliError::SemanticFailure(format!(
                "Failed to update reservation {}",
                self.id
            ))),
        }
    }
}
