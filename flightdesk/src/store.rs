//! The reservation store facade.
//!
//! [`ReservationStore`] is the contract a front-end programs against. It
//! keeps no open handle: every call opens its own [`Database`], runs one
//! statement, and drops the connection before returning, whether the call
//! succeeded or not. Storage errors never cross this boundary. They are
//! logged and each operation degrades to a typed outcome instead:
//!
//! | Operation | On storage failure |
//! |---|---|
//! | [`initialize`](ReservationStore::initialize) | `false` |
//! | [`create`](ReservationStore::create) | `None` |
//! | [`list_all`](ReservationStore::list_all) | empty `Vec` |
//! | [`get_by_id`](ReservationStore::get_by_id) | `None` |
//! | [`update`](ReservationStore::update) / [`delete`](ReservationStore::delete) | [`WriteOutcome::Failed`] |
//!
//! The store does not validate field values; see
//! [`ReservationFields::validate`] for the checks a front-end applies first.

use crate::database::{initialize_schema, Database, DatabaseConfig};
use crate::error::Result;
use crate::{Reservation, ReservationFields, ReservationId};

/// Result of an update or delete.
///
/// A statement that matched no row is not a failure: it reports
/// [`NoMatch`](WriteOutcome::NoMatch), which still counts as
/// [succeeded](WriteOutcome::succeeded). Callers that need to tell
/// "not found" apart use [`matched`](WriteOutcome::matched).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Exactly one row was changed.
    Applied,
    /// The statement ran but no row has the given id.
    NoMatch,
    /// The storage engine reported an error; nothing was changed.
    Failed,
}

impl WriteOutcome {
    /// True unless the storage engine failed.
    #[must_use]
    pub const fn succeeded(self) -> bool {
        !matches!(self, Self::Failed)
    }

    /// True only if a row with the given id was changed.
    #[must_use]
    pub const fn matched(self) -> bool {
        matches!(self, Self::Applied)
    }

    fn from_rows_matched(matched: Option<bool>) -> Self {
        match matched {
            Some(true) => Self::Applied,
            Some(false) => Self::NoMatch,
            None => Self::Failed,
        }
    }
}

/// Connection-per-operation access to the reservations table.
///
/// # Examples
///
/// ```no_run
/// use flightdesk::{DatabaseConfig, ReservationFields, ReservationStore, WriteOutcome};
///
/// let store = ReservationStore::new(DatabaseConfig::new("/tmp/flights.db"));
/// store.initialize();
///
/// let fields = ReservationFields::new("Ada Lovelace", "BA200", "LHR", "JFK", "2024-03-01", "12A");
/// if let Some(id) = store.create(&fields) {
///     assert_eq!(store.delete(id), WriteOutcome::Applied);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ReservationStore {
    config: DatabaseConfig,
}

impl ReservationStore {
    /// Creates a store for the database described by `config`.
    ///
    /// Nothing is opened until the first operation.
    #[must_use]
    pub const fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    /// Returns the database configuration used for every connection.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Ensures the reservations table exists.
    ///
    /// Safe to call on every start and any number of times; existing rows
    /// are never touched. Returns `false` if the storage engine failed.
    pub fn initialize(&self) -> bool {
        self.with_database("initialize the reservations table", |db| {
            initialize_schema(db.connection())
        })
        .is_some()
    }

    /// Inserts a new reservation and returns its id.
    ///
    /// Returns `None` if the storage engine failed.
    #[must_use = "the new id is the only way to address the created reservation"]
    pub fn create(&self, fields: &ReservationFields) -> Option<ReservationId> {
        let id = self.with_database("add reservation", |db| db.insert_reservation(fields))?;
        log::debug!("created reservation {id}");
        Some(id)
    }

    /// Returns every reservation in storage order.
    ///
    /// An empty table and a storage failure both yield an empty `Vec`.
    #[must_use]
    pub fn list_all(&self) -> Vec<Reservation> {
        self.with_database("retrieve reservations", |db| {
            Database::list_reservations(db.connection())
        })
        .unwrap_or_default()
    }

    /// Point lookup by id.
    ///
    /// Returns `None` if no reservation has this id, or if the storage
    /// engine failed (the failure is logged).
    #[must_use]
    pub fn get_by_id(&self, id: ReservationId) -> Option<Reservation> {
        self.with_database("get reservation", |db| {
            Database::get_reservation(db.connection(), id)
        })
        .flatten()
    }

    /// Replaces all six fields of reservation `id`; the id is preserved.
    pub fn update(&self, id: ReservationId, fields: &ReservationFields) -> WriteOutcome {
        let outcome = WriteOutcome::from_rows_matched(
            self.with_database("update reservation", |db| db.update_reservation(id, fields)),
        );
        log::debug!("update of reservation {id}: {outcome:?}");
        outcome
    }

    /// Removes reservation `id`.
    pub fn delete(&self, id: ReservationId) -> WriteOutcome {
        let outcome = WriteOutcome::from_rows_matched(
            self.with_database("delete reservation", |db| db.delete_reservation(id)),
        );
        log::debug!("delete of reservation {id}: {outcome:?}");
        outcome
    }

    /// Opens a connection, runs `op` against it and releases it.
    ///
    /// Errors are logged with `action` and swallowed.
    fn with_database<T, F>(&self, action: &str, op: F) -> Option<T>
    where
        F: FnOnce(&mut Database) -> Result<T>,
    {
        let result = Database::open(self.config.clone()).and_then(|mut db| op(&mut db));
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                log::error!("Failed to {action}: {e}");
                None
            }
        }
    }
}
