//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers isolated from the caller's environment
//! - Booking helpers that return the new reservation id

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Environment variables the binary reads; cleared so the host cannot leak in.
const FLIGHTDESK_ENV_VARS: [&str; 6] = [
    "FLIGHTDESK_DATA_DIR",
    "FLIGHTDESK_BUSY_TIMEOUT",
    "FLIGHTDESK_LOG_MODE",
    "FLIGHTDESK_OUTPUT_FORMAT",
    "FLIGHTDESK_CONFIRM_DELETE",
    "FLIGHTDESK_MAXIMUM_LOCK_WAIT_SECONDS",
];

/// The fields of the reference booking, as command-line flags.
pub const ADA_FLAGS: [&str; 12] = [
    "--name",
    "Ada Lovelace",
    "--flight-number",
    "BA200",
    "--departure",
    "LHR",
    "--destination",
    "JFK",
    "--date",
    "2024-03-01",
    "--seat-number",
    "12A",
];

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the flightdesk data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; the binary creates it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("flightdesk-data");

        Self { temp_dir, data_dir }
    }

    /// Get a command builder without `--data-dir`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("flightdesk").expect("Failed to find flightdesk binary");
        for var in FLIGHTDESK_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Path of the database file inside the data directory.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("flights.db")
    }

    /// Write `config.yaml` into the data directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), contents)
            .expect("Failed to write config");
    }

    /// Book a reservation and return its id.
    ///
    /// # Panics
    /// Panics if the book command fails or doesn't print an id.
    pub fn book(&self, flags: &[&str]) -> i64 {
        let output = self
            .command()
            .arg("--quiet")
            .arg("book")
            .args(flags)
            .output()
            .expect("Failed to run book command");

        assert!(
            output.status.success(),
            "Book failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
        stdout.trim().parse().expect("Output is not a valid id")
    }

    /// Book the reference reservation and return its id.
    pub fn book_ada(&self) -> i64 {
        self.book(&ADA_FLAGS)
    }

    /// Count rows directly in the database file.
    pub fn row_count(&self) -> i64 {
        let conn = rusqlite::Connection::open(self.database_path()).expect("Failed to open db");
        conn.query_row("SELECT COUNT(*) FROM reservations", [], |row| row.get(0))
            .expect("Failed to count rows")
    }

    /// Run `list --format json` and parse the result.
    pub fn list_json(&self) -> Vec<serde_json::Value> {
        let output = self
            .command()
            .args(["list", "--format", "json"])
            .output()
            .expect("Failed to run list command");
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).expect("list output is not JSON")
    }
}
