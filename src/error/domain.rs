//! Domain-specific error types using `thiserror`.
//!
//! This module defines the error object produced by raising, the value that
//! is ultimately raised, and the construction errors of the raise front-end.

use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
    result::Result as StdResult,
};

use {serde_json::Value, thiserror::Error};

use crate::raise::{reason::Callback, stringify::stringify};

/// Boxed foreign error kept as the source of a `DieError`.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Error object carrying a message and structured diagnostic metadata.
///
/// The `cause` field is the only part that changes after construction:
/// argument capture replaces it in place, so the error keeps its identity
/// while gaining context.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct DieError {
    /// Message text shown to callers.
    message: String,
    /// Structured diagnostic metadata, usually a mapping.
    cause: Option<Value>,
    /// Foreign error this one was built from, if any.
    #[source]
    source: Option<BoxError>,
}

impl DieError {
    /// Creates a new error with the given message and no cause.
    ///
    /// # Arguments
    ///
    /// * `message` - Message text, stored as given.
    ///
    /// # Returns
    ///
    /// A new `DieError`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
            source: None,
        }
    }

    /// Wraps a foreign error, keeping it as the source.
    ///
    /// The message is the foreign error's `Display` output.
    pub fn wrap<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: error.to_string(),
            cause: None,
            source: Some(Box::new(error)),
        }
    }

    /// Wraps an already boxed foreign error, keeping it as the source.
    pub fn wrap_boxed(source: BoxError) -> Self {
        Self {
            message: source.to_string(),
            cause: None,
            source: Some(source),
        }
    }

    /// Sets the cause, consuming and returning the error.
    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<Value>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn cause(&self) -> Option<&Value> {
        self.cause.as_ref()
    }

    pub fn cause_mut(&mut self) -> Option<&mut Value> {
        self.cause.as_mut()
    }

    /// Replaces the cause in place.
    pub fn set_cause(&mut self, cause: Option<Value>) {
        self.cause = cause;
    }

    /// Removes and returns the cause, leaving `None` behind.
    pub fn take_cause(&mut self) -> Option<Value> {
        self.cause.take()
    }

    /// Looks up `args` in a mapping cause.
    ///
    /// # Returns
    ///
    /// The captured argument sequence if the cause is a mapping holding one.
    #[must_use]
    pub fn captured_args(&self) -> Option<&Vec<Value>> {
        self.cause
            .as_ref()
            .and_then(|cause| cause.get("args"))
            .and_then(Value::as_array)
    }
}

/// Value transferred to the caller's failure handler by a raise.
///
/// Only `Error` carries a message and a cause. The other variants are
/// raised exactly as they were given and are never enriched.
#[derive(Debug)]
pub enum Thrown {
    /// An error object.
    Error(DieError),
    /// A raw value (null, number, object, ...) raised without wrapping.
    Value(Value),
    /// A bare callback raised without being invoked.
    Callback(Callback),
}

impl Thrown {
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    #[must_use]
    pub fn as_error(&self) -> Option<&DieError> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    pub fn as_error_mut(&mut self) -> Option<&mut DieError> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Converts into the error object, handing back non-error values unchanged.
    ///
    /// # Errors
    ///
    /// Returns `self` if this is not an error object.
    pub fn into_error(self) -> StdResult<DieError, Self> {
        match self {
            Self::Error(error) => Ok(error),
            other => Err(other),
        }
    }

    /// Returns the text a top-level handler would show.
    ///
    /// # Returns
    ///
    /// The error message, the string form of a raw value, or `[callback]`.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Error(error) => error.message().to_string(),
            Self::Value(value) => stringify(value),
            Self::Callback(_) => "[callback]".to_string(),
        }
    }
}

impl Display for Thrown {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Error(error) => Display::fmt(error, f),
            other => f.write_str(&other.message()),
        }
    }
}

impl StdError for Thrown {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Error(error) => error.source(),
            _ => None,
        }
    }
}

impl From<DieError> for Thrown {
    fn from(error: DieError) -> Self {
        Self::Error(error)
    }
}

impl From<TemplateError> for Thrown {
    fn from(error: TemplateError) -> Self {
        Self::Error(DieError::wrap(error))
    }
}

/// Template construction errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    /// Fragment count must be exactly one more than the value count.
    #[error("Template arity mismatch: {parts} fragments for {values} values")]
    ArityMismatch { parts: usize, values: usize },
}

/// Result type whose failure channel is a raised value.
pub type Result<T> = StdResult<T, Thrown>;

#[cfg(test)]
mod tests {
    use std::{error::Error, io};

    use serde_json::json;

    use crate::error::domain::{DieError, TemplateError, Thrown};

    #[test]
    fn test_die_error_display() {
        let error = DieError::new("Missing Token");
        assert_eq!(error.to_string(), "Missing Token");
        assert!(error.cause().is_none());
    }

    #[test]
    fn test_die_error_with_cause() {
        let error = DieError::new("Main error").with_cause(json!({ "code": "INVALID_INPUT" }));
        assert_eq!(error.cause(), Some(&json!({ "code": "INVALID_INPUT" })));
        assert!(error.captured_args().is_none());
    }

    #[test]
    fn test_die_error_wrap_keeps_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = DieError::wrap(io_error);
        assert_eq!(error.message(), "File not found");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_thrown_display() {
        assert_eq!(Thrown::from(DieError::new("boom")).to_string(), "boom");
        assert_eq!(Thrown::Value(json!(null)).to_string(), "null");
        assert_eq!(Thrown::Value(json!(42)).to_string(), "42");
        assert_eq!(Thrown::Value(json!("raw")).to_string(), "raw");
    }

    #[test]
    fn test_thrown_into_error() {
        let thrown = Thrown::Value(json!(7));
        assert!(!thrown.is_error());
        let back = thrown.into_error().unwrap_err();
        assert!(matches!(back, Thrown::Value(value) if value == json!(7)));
    }

    #[test]
    fn test_template_error_into_thrown() {
        let thrown = Thrown::from(TemplateError::ArityMismatch { parts: 1, values: 1 });
        assert_eq!(
            thrown.message(),
            "Template arity mismatch: 1 fragments for 1 values"
        );
        assert!(thrown.source().is_some());
    }

    #[test]
    fn test_template_error_display() {
        let error = TemplateError::ArityMismatch { parts: 2, values: 3 };
        assert_eq!(
            error.to_string(),
            "Template arity mismatch: 2 fragments for 3 values"
        );
    }
}
