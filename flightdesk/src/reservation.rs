//! Reservation types for recording booked flight segments.
//!
//! This module provides the record stored by the reservation store, the
//! caller-supplied fields, and the input checks a front-end applies before
//! handing those fields to the store. The store itself never calls
//! [`ReservationFields::validate`]; it accepts whatever strings it is given.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod proptests;

/// Names of the caller-supplied fields, in column order.
pub const FIELD_NAMES: [&str; 6] = [
    "name",
    "flight_number",
    "departure",
    "destination",
    "date",
    "seat_number",
];

/// Identifier assigned to a reservation by the store.
///
/// Ids are assigned once at creation, never change, and are never reused.
///
/// # Examples
///
/// ```
/// use flightdesk::ReservationId;
///
/// let id: ReservationId = "7".parse().unwrap();
/// assert_eq!(id.value(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(i64);

impl ReservationId {
    /// Wraps a raw row id.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw row id.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReservationId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<i64> for ReservationId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// The six caller-supplied fields of a reservation.
///
/// # Examples
///
/// ```
/// use flightdesk::ReservationFields;
///
/// let fields = ReservationFields::from_input(" Ada Lovelace ", "BA200", "LHR", "JFK", "2024-03-01", "12A");
/// assert_eq!(fields.name, "Ada Lovelace");
/// assert!(fields.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationFields {
    /// Passenger name.
    pub name: String,
    /// Flight number.
    pub flight_number: String,
    /// Departure location.
    pub departure: String,
    /// Destination location.
    pub destination: String,
    /// Flight date, nominally `YYYY-MM-DD`.
    pub date: String,
    /// Seat number.
    pub seat_number: String,
}

impl ReservationFields {
    /// Creates a field set from the given values, verbatim.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        flight_number: impl Into<String>,
        departure: impl Into<String>,
        destination: impl Into<String>,
        date: impl Into<String>,
        seat_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            flight_number: flight_number.into(),
            departure: departure.into(),
            destination: destination.into(),
            date: date.into(),
            seat_number: seat_number.into(),
        }
    }

    /// Creates a field set from raw user input, trimming every value.
    #[must_use]
    pub fn from_input(
        name: &str,
        flight_number: &str,
        departure: &str,
        destination: &str,
        date: &str,
        seat_number: &str,
    ) -> Self {
        Self::new(
            name.trim(),
            flight_number.trim(),
            departure.trim(),
            destination.trim(),
            date.trim(),
            seat_number.trim(),
        )
    }

    /// Returns the values in column order, paired with their field names.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            (FIELD_NAMES[0], self.name.as_str()),
            (FIELD_NAMES[1], self.flight_number.as_str()),
            (FIELD_NAMES[2], self.departure.as_str()),
            (FIELD_NAMES[3], self.destination.as_str()),
            (FIELD_NAMES[4], self.date.as_str()),
            (FIELD_NAMES[5], self.seat_number.as_str()),
        ]
    }

    /// Checks that every field is present and the date has the expected shape.
    ///
    /// Presence is checked first, over all fields, then the date shape.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first empty field, or the `date` field if
    /// it is not shaped like `YYYY-MM-DD`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some((field, _)) = self.entries().iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ValidationError {
                field: (*field).to_string(),
                message: "All fields are required".into(),
            });
        }

        if !is_valid_date_shape(&self.date) {
            return Err(ValidationError {
                field: "date".into(),
                message: "use YYYY-MM-DD format".into(),
            });
        }

        Ok(())
    }
}

/// Loose `YYYY-MM-DD` shape check.
///
/// True when `date` is exactly 10 characters long with `-` at positions 5
/// and 8. Digits and calendar validity are not checked.
///
/// # Examples
///
/// ```
/// use flightdesk::is_valid_date_shape;
///
/// assert!(is_valid_date_shape("2024-03-01"));
/// assert!(is_valid_date_shape("2024-13-99"));
/// assert!(!is_valid_date_shape("2024/03/01"));
/// assert!(!is_valid_date_shape("24-03-01"));
/// ```
#[must_use]
pub fn is_valid_date_shape(date: &str) -> bool {
    let chars: Vec<char> = date.chars().collect();
    chars.len() == 10 && chars[4] == '-' && chars[7] == '-'
}

/// A stored flight reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Store-assigned identifier.
    pub id: ReservationId,
    /// The caller-supplied values.
    #[serde(flatten)]
    pub fields: ReservationFields,
}

impl Reservation {
    /// Pairs an id with its fields.
    #[must_use]
    pub const fn new(id: ReservationId, fields: ReservationFields) -> Self {
        Self { id, fields }
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {}->{} {} seat {}",
            self.id,
            self.fields.name,
            self.fields.flight_number,
            self.fields.departure,
            self.fields.destination,
            self.fields.date,
            self.fields.seat_number
        )
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
