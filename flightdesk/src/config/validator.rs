//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Upper bound for the lock wait, one hour.
pub const MAX_LOCK_WAIT_SECONDS: u64 = 3600;

/// Validates configuration values after merging.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock wait is zero or longer than an hour.
    ///
    /// # Examples
    ///
    /// ```
    /// use flightdesk::config::{Config, ConfigValidator};
    ///
    /// let bad = Config { maximum_lock_wait_seconds: Some(0), ..Default::default() };
    /// assert!(ConfigValidator::validate(&bad).is_err());
    /// assert!(ConfigValidator::validate(&Config::default()).is_ok());
    /// ```
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(seconds) = config.maximum_lock_wait_seconds {
            if seconds == 0 || seconds > MAX_LOCK_WAIT_SECONDS {
                return Err(Error::Validation {
                    field: "maximum_lock_wait_seconds".into(),
                    message: format!("must be between 1 and {MAX_LOCK_WAIT_SECONDS}"),
                });
            }
        }
        Ok(())
    }
}
