//! Build script for flightdesk-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is restated here.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("flightdesk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Record and manage flight reservations")
        .long_about("Command-line tool for booking, listing, editing and deleting flight reservations kept in a local SQLite file")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("FLIGHTDESK_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("FLIGHTDESK_BUSY_TIMEOUT"),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Create the data directory and reservations table")
                .long_about("Create the data directory and the reservations table if missing"),
            Command::new("book")
                .about("Book a new reservation")
                .long_about("Record a reservation after checking every field is present and the date is shaped YYYY-MM-DD"),
            Command::new("list")
                .about("List all reservations")
                .long_about("Display every reservation as a table, JSON, CSV or TSV"),
            Command::new("show")
                .about("Show a single reservation")
                .long_about("Display one reservation by id"),
            Command::new("edit")
                .about("Change fields of an existing reservation")
                .long_about("Overlay the given fields on a stored reservation and save it"),
            Command::new("delete")
                .about("Delete one or more reservations")
                .long_about("Delete reservations by id, asking for confirmation unless --yes is given"),
            Command::new("check")
                .about("Check the integrity of the database file")
                .long_about("Run SQLite's integrity check over the reservations database"),
            Command::new("show-data-dir")
                .about("Show the resolved data directory path")
                .long_about("Display the path to the flightdesk data directory"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("flightdesk.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
