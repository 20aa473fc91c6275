//! Raiser configuration.
//!
//! This module provides the settings that control marker messages, message
//! trimming, and the exit code of the process-exit alias.

pub mod settings;

pub use settings::{RaiserSettings, SETTINGS_ENV, SettingsError, get_settings_path};
