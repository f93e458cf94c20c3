//! Show command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::Args;
use flightdesk::{Error, ReservationId};

/// Show a single reservation.
#[derive(Args)]
pub struct ShowCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: ReservationId,

    /// Print the reservation as JSON
    #[arg(long)]
    pub json: bool,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let reservation = store.get_by_id(self.id).ok_or_else(|| Error::NotFound {
            resource: format!("reservation {}", self.id),
        })?;

        if self.json {
            let json = serde_json::to_string_pretty(&reservation)
                .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
            println!("{json}");
            return Ok(());
        }

        println!("id: {}", reservation.id);
        for (field, value) in reservation.fields.entries() {
            println!("{field}: {value}");
        }

        Ok(())
    }
}
