//! Error types for the flightdesk library.
//!
//! Every fallible operation below the store facade returns [`Result`].
//! The facade itself catches these errors and degrades to typed outcomes.

use thiserror::Error;

/// Result type alias for operations that may fail with a flightdesk error.
///
/// # Examples
///
/// ```
/// use flightdesk::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the flightdesk library.
#[derive(Debug, Error)]
pub enum Error {
    /// The storage engine failed while connecting, executing or committing.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if the error came from the storage engine.
    ///
    /// # Examples
    ///
    /// ```
    /// use flightdesk::Error;
    ///
    /// let err = Error::from(rusqlite::Error::QueryReturnedNoRows);
    /// assert!(err.is_storage());
    /// ```
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Database(_) | Self::DatabaseCorruption { .. })
    }
}
