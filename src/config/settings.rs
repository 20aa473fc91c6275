//! Raiser settings loaded from an optional JSON file.
//!
//! The settings file location comes from the `PHPDIE_SETTINGS` environment
//! variable. Without it, built-in defaults apply.

use std::{
    env::var,
    fs::read_to_string,
    io::Error as StdError,
    path::{Path, PathBuf},
};

use {
    serde::{Deserialize, Serialize},
    serde_json::{Error as SerdeJsonError, from_str},
    thiserror::Error,
    tracing::debug,
};

/// Environment variable naming the settings file.
pub const SETTINGS_ENV: &str = "PHPDIE_SETTINGS";

/// Error type for settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read the settings file.
    #[error("IO error: {0}")]
    IoError(#[from] StdError),
    /// Failed to deserialize settings.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] SerdeJsonError),
    /// Invalid settings value.
    #[error("Invalid settings value: {reason}")]
    InvalidValue { reason: String },
}

/// Serializable raiser settings with default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaiserSettings {
    /// Message of the error raised after a side-effect callback.
    pub marker: String,
    /// Message of the error raised by the deprecated `dies` alias.
    pub legacy_marker: String,
    /// Exit code used by the deprecated process-exit alias.
    pub exit_code: i32,
}

impl Default for RaiserSettings {
    fn default() -> Self {
        Self {
            marker: "DIE".to_string(),
            legacy_marker: "DIES".to_string(),
            exit_code: 1,
        }
    }
}

impl RaiserSettings {
    /// Loads settings from a JSON file.
    ///
    /// Missing keys take their default values.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the settings file.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `RaiserSettings` or a `SettingsError`.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the file cannot be read, does not parse, or
    /// holds a blank marker.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        debug!("Loading raiser settings from file: {:?}", path);
        let contents = read_to_string(path)?;
        let settings: Self = from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from the file named by `PHPDIE_SETTINGS`, if set.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the variable is set and the file fails to load.
    pub fn from_env() -> Result<Self, SettingsError> {
        match get_settings_path() {
            Some(path) => Self::load(path),
            None => {
                debug!("{} not set, using default raiser settings", SETTINGS_ENV);
                Ok(Self::default())
            }
        }
    }

    /// Checks that both markers are non-blank.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.marker.trim().is_empty() {
            return Err(SettingsError::InvalidValue {
                reason: "marker must not be blank".to_string(),
            });
        }
        if self.legacy_marker.trim().is_empty() {
            return Err(SettingsError::InvalidValue {
                reason: "legacy_marker must not be blank".to_string(),
            });
        }
        Ok(())
    }
}

/// Gets the settings file path from the environment.
///
/// # Returns
///
/// The path if `PHPDIE_SETTINGS` is set and non-empty.
#[must_use]
pub fn get_settings_path() -> Option<PathBuf> {
    if let Ok(path) = var(SETTINGS_ENV)
        && !path.is_empty()
    {
        return Some(PathBuf::from(path));
    }
    None
}
