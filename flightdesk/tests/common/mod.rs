//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the flightdesk library.

use flightdesk::{DatabaseConfig, ReservationFields, ReservationStore};
use tempfile::TempDir;

/// Creates an initialized store backed by a file in a fresh temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_test_store() -> (TempDir, ReservationStore) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let store = ReservationStore::new(DatabaseConfig::in_data_dir(dir.path()));
    assert!(store.initialize(), "initialize should succeed");
    (dir, store)
}

/// Builder for creating test reservation fields with sensible defaults.
///
/// # Examples
///
/// ```no_run
/// # use common::FieldsFixture;
/// let fields = FieldsFixture::new().with_name("Grace Hopper").build();
/// ```
#[allow(dead_code)]
pub struct FieldsFixture {
    fields: ReservationFields,
}

#[allow(dead_code)]
impl FieldsFixture {
    /// Starts from a complete, valid field set.
    pub fn new() -> Self {
        Self {
            fields: ReservationFields::new(
                "Ada Lovelace",
                "BA200",
                "LHR",
                "JFK",
                "2024-03-01",
                "12A",
            ),
        }
    }

    /// Sets the passenger name.
    pub fn with_name(mut self, name: &str) -> Self {
        self.fields.name = name.to_string();
        self
    }

    /// Sets the flight number.
    pub fn with_flight(mut self, flight_number: &str) -> Self {
        self.fields.flight_number = flight_number.to_string();
        self
    }

    /// Sets the date.
    pub fn with_date(mut self, date: &str) -> Self {
        self.fields.date = date.to_string();
        self
    }

    /// Sets the seat number.
    pub fn with_seat(mut self, seat_number: &str) -> Self {
        self.fields.seat_number = seat_number.to_string();
        self
    }

    /// Returns the field set.
    pub fn build(self) -> ReservationFields {
        self.fields
    }
}
