//! Operational helpers for raising from `Option` and `Result` values.
//!
//! This module provides the extension trait that puts a raise in expression
//! position and a centralized reporter for raised values.

use {
    serde_json::Value,
    tracing::{Level, debug, error, info, warn},
};

use crate::{
    error::domain::{Result, Thrown},
    raise::{Reason, raise},
};

/// Extension trait for raising when a value is missing or failed.
///
/// `value.or_die("Missing Token")?` reads like `value ?? DIE("Missing Token")`.
pub trait DieExt<T> {
    /// Keeps the value, or raises `reason`.
    ///
    /// # Errors
    ///
    /// Returns the raised value if `self` is `None` or `Err`.
    fn or_die(self, reason: impl Into<Reason>) -> Result<T>;

    /// Keeps the value, or raises the reason built by `reason`.
    ///
    /// The closure only runs on the failure path.
    ///
    /// # Errors
    ///
    /// Returns the raised value if `self` is `None` or `Err`.
    fn or_die_with<R, F>(self, reason: F) -> Result<T>
    where
        R: Into<Reason>,
        F: FnOnce() -> R;
}

impl<T> DieExt<T> for Option<T> {
    fn or_die(self, reason: impl Into<Reason>) -> Result<T> {
        self.ok_or_else(|| raise(reason))
    }

    fn or_die_with<R, F>(self, reason: F) -> Result<T>
    where
        R: Into<Reason>,
        F: FnOnce() -> R,
    {
        self.ok_or_else(|| raise(reason()))
    }
}

impl<T, E> DieExt<T> for std::result::Result<T, E> {
    fn or_die(self, reason: impl Into<Reason>) -> Result<T> {
        self.map_err(|_| raise(reason))
    }

    fn or_die_with<R, F>(self, reason: F) -> Result<T>
    where
        R: Into<Reason>,
        F: FnOnce() -> R,
    {
        self.map_err(|_| raise(reason()))
    }
}

/// Centralized reporting of raised values.
///
/// The `ErrorReporter` logs a raised value's message together with its
/// cause, so captured arguments show up in structured logs.
pub struct ErrorReporter;

impl ErrorReporter {
    /// Logs `thrown` at `level` with the given context.
    pub fn report(thrown: &Thrown, level: Level, context: &str) {
        let cause = Self::cause_json(thrown);
        match level {
            Level::ERROR => error!(context = context, cause = %cause, "{}", thrown),
            Level::WARN => warn!(context = context, cause = %cause, "{}", thrown),
            Level::INFO => info!(context = context, cause = %cause, "{}", thrown),
            _ => debug!(context = context, cause = %cause, "{}", thrown),
        }
    }

    /// Reports an error-level raise.
    pub fn error(thrown: &Thrown, context: &str) {
        Self::report(thrown, Level::ERROR, context);
    }

    /// Reports a recoverable raise.
    pub fn warn(thrown: &Thrown, context: &str) {
        Self::report(thrown, Level::WARN, context);
    }

    /// Converts a raised value to a user-facing message.
    ///
    /// Only the message is shown; the cause is diagnostic data.
    #[must_use]
    pub fn to_user_message(thrown: &Thrown) -> String {
        thrown.message()
    }

    /// Renders the cause of an error object as compact JSON, `null` otherwise.
    #[must_use]
    pub fn cause_json(thrown: &Thrown) -> String {
        thrown
            .as_error()
            .and_then(|error| error.cause())
            .map_or_else(|| Value::Null.to_string(), Value::to_string)
    }
}
