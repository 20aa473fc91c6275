//! Merging captured call arguments into an error's cause.

use {
    anyhow::Error as AnyhowError,
    serde_json::{Map, Value},
    tracing::trace,
};

use crate::error::{DieError, Thrown};

/// Failure value that may carry captured call arguments.
///
/// Only error objects are enriched. Other failure values come back unchanged.
pub trait Enrich: Sized {
    /// Attaches `args` to the error's cause, returning the same error.
    #[must_use]
    fn enrich(self, args: Vec<Value>) -> Self;
}

/// Replaces the cause of `error` with a mapping that holds `args`.
///
/// The new mapping takes every entry of a mapping cause, keeps any other
/// non-null cause under the `cause` key, and finally binds `args`, replacing
/// an `args` entry inherited from the prior cause.
///
/// # Arguments
///
/// * `error` - Error to update in place.
/// * `args` - Captured call arguments, in call order.
pub fn enrich(error: &mut DieError, args: Vec<Value>) {
    let mut cause = Map::new();
    match error.take_cause() {
        Some(Value::Object(prior)) => cause.extend(prior),
        Some(Value::Null) | None => {}
        Some(prior) => {
            cause.insert("cause".to_string(), prior);
        }
    }

    trace!(args = args.len(), "Attached call arguments to error cause");
    cause.insert("args".to_string(), Value::Array(args));
    error.set_cause(Some(Value::Object(cause)));
}

impl Enrich for DieError {
    fn enrich(mut self, args: Vec<Value>) -> Self {
        enrich(&mut self, args);
        self
    }
}

impl Enrich for Thrown {
    fn enrich(mut self, args: Vec<Value>) -> Self {
        if let Some(error) = self.as_error_mut() {
            enrich(error, args);
        }
        self
    }
}

/// Errors of any other type are rebuilt as a `DieError` with the same
/// message, keeping the original as its source.
impl Enrich for AnyhowError {
    fn enrich(mut self, args: Vec<Value>) -> Self {
        if let Some(error) = self.downcast_mut::<DieError>() {
            enrich(error, args);
            return self;
        }
        if let Some(thrown) = self.downcast_mut::<Thrown>() {
            if let Some(error) = thrown.as_error_mut() {
                enrich(error, args);
            }
            return self;
        }

        let mut wrapped = DieError::wrap_boxed(self.into());
        enrich(&mut wrapped, args);
        AnyhowError::new(wrapped)
    }
}
