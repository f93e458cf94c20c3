//! Book command implementation.
//!
//! This module implements the `book` command, which validates the supplied
//! fields and records a new reservation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, FieldArgs, GlobalOptions};
use clap::Args;
use flightdesk::ReservationFields;

/// Book a new reservation.
#[derive(Args)]
pub struct BookCommand {
    #[command(flatten)]
    pub fields: FieldArgs,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Validate before touching storage so a rejected booking writes nothing
        let fields = self.fields.overlay(&ReservationFields::default());
        fields.validate()?;

        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let id = store
            .create(&fields)
            .ok_or_else(|| CliError::SemanticFailure("Failed to add reservation".to_string()))?;

        if global.quiet {
            println!("{id}");
        } else {
            println!("Booked reservation {id} for {}", fields.name);
        }

        Ok(())
    }
}
