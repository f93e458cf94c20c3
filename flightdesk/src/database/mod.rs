//! Database layer for persistent storage of flight reservations.
//!
//! This module provides the `SQLite` storage underneath the
//! [`ReservationStore`](crate::ReservationStore): connection parameters,
//! schema bootstrap, and one fallible method per statement.
//!
//! # Examples
//!
//! ```no_run
//! use flightdesk::database::{initialize_schema, Database, DatabaseConfig};
//! use flightdesk::ReservationFields;
//!
//! let config = DatabaseConfig::new("/tmp/flights.db");
//! let mut db = Database::open(config).unwrap();
//! initialize_schema(db.connection()).unwrap();
//!
//! let fields = ReservationFields::new("Ada Lovelace", "BA200", "LHR", "JFK", "2024-03-01", "12A");
//! let id = db.insert_reservation(&fields).unwrap();
//!
//! for reservation in Database::list_reservations(db.connection()).unwrap() {
//!     println!("{reservation}");
//! }
//! # let _ = id;
//! ```

mod config;
mod connection;
mod operations;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{
    default_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME, DATA_DIR_ENV,
};
pub use connection::{Database, MAX_BUSY_TIMEOUT};
pub use schema::{initialize_schema, table_exists};
