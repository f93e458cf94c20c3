//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `FLIGHTDESK_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;

/// Lock wait override, in seconds.
pub const LOCK_WAIT_ENV: &str = "FLIGHTDESK_MAXIMUM_LOCK_WAIT_SECONDS";
/// Output format override.
pub const OUTPUT_FORMAT_ENV: &str = "FLIGHTDESK_OUTPUT_FORMAT";
/// Delete confirmation override.
pub const CONFIRM_DELETE_ENV: &str = "FLIGHTDESK_CONFIRM_DELETE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use flightdesk::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric lock wait, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(seconds) = env::var(LOCK_WAIT_ENV) {
            config.maximum_lock_wait_seconds =
                Some(seconds.trim().parse().map_err(|_| Error::Validation {
                    field: LOCK_WAIT_ENV.into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        if let Ok(format) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(format.parse::<OutputFormat>().map_err(|message| {
                Error::Validation {
                    field: OUTPUT_FORMAT_ENV.into(),
                    message,
                }
            })?);
        }

        if let Ok(val) = env::var(CONFIRM_DELETE_ENV) {
            config.confirm_delete = Some(Self::parse_bool(CONFIRM_DELETE_ENV, &val)?);
        }

        Ok(())
    }

    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Clears every variable this module reads.
    fn clear_env() {
        for var in [LOCK_WAIT_ENV, OUTPUT_FORMAT_ENV, CONFIRM_DELETE_ENV] {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_parse_bool() {
        for truthy in ["true", "1", "YES", "on"] {
            assert!(EnvironmentConfig::parse_bool("x", truthy).unwrap());
        }
        for falsy in ["false", "0", "no", "OFF"] {
            assert!(!EnvironmentConfig::parse_bool("x", falsy).unwrap());
        }
        assert!(EnvironmentConfig::parse_bool("x", "maybe").is_err());
    }

    #[test]
    #[serial]
    fn test_no_overrides_leaves_config() {
        clear_env();
        let mut config = Config {
            maximum_lock_wait_seconds: Some(3),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.maximum_lock_wait_seconds, Some(3));
        assert_eq!(config.output_format, None);
    }

    #[test]
    #[serial]
    fn test_all_overrides() {
        clear_env();
        env::set_var(LOCK_WAIT_ENV, "9");
        env::set_var(OUTPUT_FORMAT_ENV, "json");
        env::set_var(CONFIRM_DELETE_ENV, "no");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        clear_env();

        assert_eq!(config.maximum_lock_wait_seconds, Some(9));
        assert_eq!(config.output_format, Some(OutputFormat::Json));
        assert_eq!(config.confirm_delete, Some(false));
    }

    #[test]
    #[serial]
    fn test_invalid_lock_wait() {
        clear_env();
        env::set_var(LOCK_WAIT_ENV, "soon");
        let result = EnvironmentConfig::apply_overrides(&mut Config::default());
        clear_env();

        let err = result.unwrap_err();
        assert!(err.to_string().contains(LOCK_WAIT_ENV));
    }

    #[test]
    #[serial]
    fn test_invalid_output_format() {
        clear_env();
        env::set_var(OUTPUT_FORMAT_ENV, "xml");
        let result = EnvironmentConfig::apply_overrides(&mut Config::default());
        clear_env();

        assert!(result.is_err());
    }
}
