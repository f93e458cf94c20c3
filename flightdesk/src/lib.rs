#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # flightdesk
//!
//! A library for recording, listing, editing and deleting flight reservations
//! kept in a local single-table `SQLite` store.
//!
//! ## Core Types
//!
//! - [`ReservationStore`]: the store facade; every call opens its own
//!   connection and never returns an error
//! - [`Reservation`], [`ReservationFields`] and [`ReservationId`]: the record
//! - [`Database`]: the fallible layer the store is built on
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use flightdesk::{DatabaseConfig, ReservationFields, ReservationStore};
//!
//! let store = ReservationStore::new(DatabaseConfig::new("/tmp/flights.db"));
//! assert!(store.initialize());
//!
//! let fields = ReservationFields::new("Ada Lovelace", "BA200", "LHR", "JFK", "2024-03-01", "12A");
//! let id = store.create(&fields).expect("storage failure");
//! assert_eq!(store.get_by_id(id).unwrap().fields, fields);
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod reservation;
pub mod store;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use reservation::{is_valid_date_shape, Reservation, ReservationFields, ReservationId};
pub use store::{ReservationStore, WriteOutcome};
