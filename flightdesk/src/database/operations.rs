//! Database CRUD operations for reservations.
//!
//! Each method maps to exactly one SQL statement. Writes run inside an
//! IMMEDIATE transaction that is committed before returning.

use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use crate::error::{Error, Result};
use crate::{Reservation, ReservationFields, ReservationId};

use super::connection::Database;

const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations (name, flight_number, departure, destination, date, seat_number)
    VALUES (?, ?, ?, ?, ?, ?)
";

const LIST_RESERVATIONS: &str = r"
    SELECT id, name, flight_number, departure, destination, date, seat_number
    FROM reservations
    ORDER BY id
";

const SELECT_RESERVATION: &str = r"
    SELECT id, name, flight_number, departure, destination, date, seat_number
    FROM reservations
    WHERE id = ?
";

const UPDATE_RESERVATION: &str = r"
    UPDATE reservations
    SET name = ?, flight_number = ?, departure = ?, destination = ?, date = ?, seat_number = ?
    WHERE id = ?
";

const DELETE_RESERVATION: &str = "DELETE FROM reservations WHERE id = ?";

const COUNT_RESERVATIONS: &str = "SELECT COUNT(*) FROM reservations";

/// Deserializes a reservation from a database row.
///
/// Expects row fields in this order: id, name, `flight_number`, departure,
/// destination, date, `seat_number`
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let id: i64 = row.get(0)?;
    let fields = ReservationFields {
        name: row.get(1)?,
        flight_number: row.get(2)?,
        departure: row.get(3)?,
        destination: row.get(4)?,
        date: row.get(5)?,
        seat_number: row.get(6)?,
    };
    Ok(Reservation::new(ReservationId::new(id), fields))
}

impl Database {
    /// Inserts a new reservation and returns its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The transaction cannot be started
    /// - The insert fails (including a missing table)
    /// - The transaction cannot be committed
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use flightdesk::database::{Database, DatabaseConfig};
    /// use flightdesk::ReservationFields;
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/flights.db")).unwrap();
    /// let fields = ReservationFields::new("Ada", "BA200", "LHR", "JFK", "2024-03-01", "12A");
    /// let id = db.insert_reservation(&fields).unwrap();
    /// println!("created reservation {id}");
    /// ```
    pub fn insert_reservation(&mut self, fields: &ReservationFields) -> Result<ReservationId> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            INSERT_RESERVATION,
            params![
                fields.name,
                fields.flight_number,
                fields.departure,
                fields.destination,
                fields.date,
                fields.seat_number,
            ],
        )?;
        let id = ReservationId::new(tx.last_insert_rowid());

        tx.commit()?;
        Ok(id)
    }

    /// Lists every reservation in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be read.
    pub fn list_reservations(conn: &Connection) -> Result<Vec<Reservation>> {
        let mut stmt = conn.prepare(LIST_RESERVATIONS)?;

        let reservations = stmt
            .query_map([], row_to_reservation)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(reservations)
    }

    /// Retrieves a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(reservation))` if the reservation exists
    /// - `Ok(None)` if the reservation doesn't exist
    /// - `Err(_)` if a database error occurs
    pub fn get_reservation(conn: &Connection, id: ReservationId) -> Result<Option<Reservation>> {
        let mut stmt = conn.prepare_cached(SELECT_RESERVATION)?;
        let reservation = stmt
            .query_row(params![id.value()], row_to_reservation)
            .optional()?;
        Ok(reservation)
    }

    /// Replaces all six fields of the reservation with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or update fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the reservation was found and updated
    /// - `Ok(false)` if no reservation has this id
    pub fn update_reservation(
        &mut self,
        id: ReservationId,
        fields: &ReservationFields,
    ) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let rows_affected = tx.execute(
            UPDATE_RESERVATION,
            params![
                fields.name,
                fields.flight_number,
                fields.departure,
                fields.destination,
                fields.date,
                fields.seat_number,
                id.value(),
            ],
        )?;

        tx.commit()?;
        Ok(rows_affected > 0)
    }

    /// Deletes the reservation with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or delete fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the reservation was found and deleted
    /// - `Ok(false)` if no reservation has this id
    pub fn delete_reservation(&mut self, id: ReservationId) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let rows_affected = tx.execute(DELETE_RESERVATION, params![id.value()])?;

        tx.commit()?;
        Ok(rows_affected > 0)
    }

    /// Counts the stored reservations.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_reservations(conn: &Connection) -> Result<u64> {
        let count: i64 = conn.query_row(COUNT_RESERVATIONS, [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or_default())
    }

    /// Verifies database integrity using PRAGMA `integrity_check`.
    ///
    /// # Errors
    ///
    /// Returns an error if the integrity check fails or detects corruption.
    pub fn verify_integrity(&self) -> Result<()> {
        let result: String = self
            .conn
            .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

        if result == "ok" {
            Ok(())
        } else {
            Err(Error::DatabaseCorruption {
                details: format!("Integrity check failed: {result}"),
            })
        }
    }
}
