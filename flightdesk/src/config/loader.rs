//! Configuration file discovery and loading.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the user configuration inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use flightdesk::config::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load_user_config(Some(Path::new("/tmp/flightdesk"))).unwrap();
/// println!("{config:?}");
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the user configuration file, if it exists.
    ///
    /// If `data_dir` is provided, loads from `{data_dir}/config.yaml`.
    /// Otherwise uses the default data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config(data_dir: Option<&Path>) -> Result<Option<Config>> {
        let config_path = Self::user_config_path(data_dir)?;

        if !config_path.exists() {
            return Ok(None);
        }

        log::debug!("loading configuration from {}", config_path.display());
        Self::load_file(&config_path).map(Some)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Failed to read configuration file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// Path of the user configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if no `data_dir` is given and the home directory
    /// cannot be determined.
    pub fn user_config_path(data_dir: Option<&Path>) -> Result<PathBuf> {
        match data_dir {
            Some(dir) => Ok(dir.join(CONFIG_FILE_NAME)),
            None => Ok(crate::database::default_data_dir()?.join(CONFIG_FILE_NAME)),
        }
    }
}
