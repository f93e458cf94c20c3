//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including data directory resolution, configuration loading, store setup
//! and interactive confirmation.

use crate::error::CliError;
use clap::Args;
use flightdesk::database::default_data_dir;
use flightdesk::{Config, ConfigBuilder, DatabaseConfig, ReservationFields, ReservationStore};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the busy timeout (in seconds).
    pub busy_timeout: Option<u32>,
}

/// Field flags shared by `book` and `edit`.
///
/// Every flag is optional so that a missing field is reported by the same
/// presence check as an empty one.
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Passenger name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Flight number
    #[arg(long, value_name = "FLIGHT")]
    pub flight_number: Option<String>,

    /// Departure location
    #[arg(long, value_name = "FROM")]
    pub departure: Option<String>,

    /// Destination location
    #[arg(long, value_name = "TO")]
    pub destination: Option<String>,

    /// Flight date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Seat number
    #[arg(long, value_name = "SEAT")]
    pub seat_number: Option<String>,
}

impl FieldArgs {
    /// True if no field flag was given.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.flight_number.is_none()
            && self.departure.is_none()
            && self.destination.is_none()
            && self.date.is_none()
            && self.seat_number.is_none()
    }

    /// Overlays the supplied flags on `base` and trims every value.
    pub fn overlay(self, base: &ReservationFields) -> ReservationFields {
        let pick = |flag: Option<String>, current: &str| flag.unwrap_or_else(|| current.to_string());
        let name = pick(self.name, &base.name);
        let flight_number = pick(self.flight_number, &base.flight_number);
        let departure = pick(self.departure, &base.departure);
        let destination = pick(self.destination, &base.destination);
        let date = pick(self.date, &base.date);
        let seat_number = pick(self.seat_number, &base.seat_number);

        ReservationFields::from_input(
            &name,
            &flight_number,
            &departure,
            &destination,
            &date,
            &seat_number,
        )
    }
}

/// Resolve the data directory.
///
/// Priority: `--data-dir` (or `FLIGHTDESK_DATA_DIR`) > `~/.flightdesk`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    if let Some(ref data_dir) = global.data_dir {
        return Ok(data_dir.clone());
    }

    default_data_dir().map_err(|e| CliError::Config(e.to_string()))
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. `config.yaml` in the data directory
/// 3. Built-in defaults
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;

    ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build the store for the resolved data directory and bootstrap its table.
///
/// The busy timeout comes from `--busy-timeout` when given, otherwise from
/// the configured maximum lock wait.
pub fn open_store(global: &GlobalOptions, config: &Config) -> Result<ReservationStore, CliError> {
    let data_dir = resolve_data_dir(global)?;

    let busy_timeout = global
        .busy_timeout
        .map_or_else(|| config.lock_wait(), |secs| Duration::from_secs(secs.into()));

    let store = ReservationStore::new(
        DatabaseConfig::in_data_dir(&data_dir).with_busy_timeout(busy_timeout),
    );

    if !store.initialize() {
        return Err(CliError::SemanticFailure(format!(
            "Failed to initialize the reservations table in {}",
            data_dir.display()
        )));
    }

    Ok(store)
}

/// Ask a yes/no question on stderr and read the answer from `input`.
///
/// Only `y` and `yes` (any case) count as consent.
pub fn confirm(prompt: &str, input: &mut impl BufRead) -> Result<bool, CliError> {
    let mut stderr = std::io::stderr();
    write!(stderr, "{prompt} [y/N] ")?;
    stderr.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
