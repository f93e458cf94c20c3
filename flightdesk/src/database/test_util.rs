//! Shared test utilities for database unit tests.

use tempfile::tempdir;

use crate::database::{initialize_schema, Database, DatabaseConfig};
use crate::ReservationFields;

/// Creates an initialized temporary test database.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();
    initialize_schema(db.connection()).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Creates a complete field set for the given passenger name.
#[must_use]
pub fn sample_fields(name: &str) -> ReservationFields {
    ReservationFields::new(name, "BA200", "LHR", "JFK", "2024-03-01", "12A")
}
