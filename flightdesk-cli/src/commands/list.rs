//! List command implementation.
//!
//! This module implements the `list` command, which displays every
//! reservation in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::Args;
use flightdesk::{OutputFormat, Reservation};
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 7] = [
    "id",
    "name",
    "flight_number",
    "departure",
    "destination",
    "date",
    "seat_number",
];

/// Message printed by the table format when the store is empty.
const EMPTY_MESSAGE: &str = "No reservations found.";

/// List all reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Output format (defaults to the configured format)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let reservations = store.list_all();

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        match self.format.unwrap_or_else(|| config.output_format()) {
            OutputFormat::Table => format_as_table(&mut handle, &reservations),
            OutputFormat::Json => format_as_json(&mut handle, &reservations),
            OutputFormat::Csv => format_as_delimited(&mut handle, &reservations, b','),
            OutputFormat::Tsv => format_as_delimited(&mut handle, &reservations, b'\t'),
        }
    }
}

/// Format reservations as a human-readable table.
fn format_as_table(out: &mut impl Write, reservations: &[Reservation]) -> Result<(), CliError> {
    if reservations.is_empty() {
        writeln!(out, "{EMPTY_MESSAGE}")?;
        return Ok(());
    }

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;

    for res in reservations {
        let values = res
            .fields
            .entries()
            .iter()
            .map(|(_, value)| *value)
            .collect::<Vec<_>>()
            .join("\t");
        writeln!(out, "{}\t{values}", res.id)?;
    }

    Ok(())
}

/// Format reservations as JSON.
fn format_as_json(out: &mut impl Write, reservations: &[Reservation]) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, reservations)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(out)?;
    Ok(())
}

/// Convert `csv::Error` to `CliError`.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Format reservations as delimited output (CSV or TSV).
fn format_as_delimited(
    out: &mut impl Write,
    reservations: &[Reservation],
    delimiter: u8,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for res in reservations {
        let id = res.id.to_string();
        let mut record = vec![id.as_str()];
        record.extend(res.fields.entries().iter().map(|(_, value)| *value));
        writer.write_record(&record).map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
