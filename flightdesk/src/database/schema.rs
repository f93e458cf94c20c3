//! Database schema definitions and bootstrap.
//!
//! The store keeps a single flat table. There is no version table and no
//! migration path: bootstrap only ensures the table exists.

use rusqlite::{Connection, OptionalExtension};

use crate::error::Result;

/// Name of the reservations table.
pub const RESERVATIONS_TABLE: &str = "reservations";

/// SQL statement to create the reservations table.
///
/// `AUTOINCREMENT` keeps ids monotonically increasing and prevents reuse of
/// the id of a deleted row.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        flight_number TEXT NOT NULL,
        departure TEXT NOT NULL,
        destination TEXT NOT NULL,
        date TEXT NOT NULL,
        seat_number TEXT NOT NULL
    )";

const SELECT_TABLE: &str = "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?";

/// Ensures the reservations table exists.
///
/// Idempotent: running it against an initialized database is a no-op and
/// leaves existing rows untouched.
///
/// # Errors
///
/// Returns an error if the statement fails to execute.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use flightdesk::database::{initialize_schema, table_exists};
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// initialize_schema(&conn).unwrap();
/// assert!(table_exists(&conn).unwrap());
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_RESERVATIONS_TABLE, [])?;
    Ok(())
}

/// Checks whether the reservations table exists.
///
/// # Errors
///
/// Returns an error if `sqlite_master` cannot be queried.
pub fn table_exists(conn: &Connection) -> Result<bool> {
    let found: Option<String> = conn
        .query_row(SELECT_TABLE, [RESERVATIONS_TABLE], |row| row.get(0))
        .optional()?;
    Ok(found.is_some())
}
