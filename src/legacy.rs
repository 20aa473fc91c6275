//! Deprecated aliases kept for callers of the earlier API.
//!
//! Each alias is a thin caller of [`raise`](crate::raise::raise) or of the
//! shared formatting helper.

use std::process::exit;

use {
    anyhow::Result as AnyhowResult,
    serde_json::{Map, Value},
    tracing::error,
};

use crate::{
    config::RaiserSettings,
    error::{DieError, Thrown},
    raise::{Reason, stringify_reason},
};

/// Raises an error whose message is the flattened `reason`, whatever its shape.
#[deprecated(note = "raise an error object directly: `raise(DieError::new(..))`")]
pub fn die_error(reason: impl Into<Reason>) -> Thrown {
    Thrown::Error(DieError::new(stringify_reason(&reason.into())))
}

/// Runs `callback` with `args`, then raises the legacy marker error.
///
/// Unlike a side-effect raise, a failing callback is not swallowed.
///
/// # Arguments
///
/// * `callback` - Notifier invoked with `args`.
/// * `args` - Values passed to the callback and recorded as the cause.
/// * `settings` - Supplies the legacy marker message.
///
/// # Errors
///
/// Returns the callback's own error if it fails.
#[deprecated(note = "use `raise(Reason::side_effect(callback, args))`")]
pub fn dies<F>(callback: F, args: Vec<Value>, settings: &RaiserSettings) -> AnyhowResult<Thrown>
where
    F: FnOnce(&[Value]) -> AnyhowResult<()>,
{
    callback(&args)?;
    let mut cause = Map::new();
    cause.insert("args".to_string(), Value::Array(args));
    Ok(Thrown::Error(
        DieError::new(settings.legacy_marker.clone()).with_cause(Value::Object(cause)),
    ))
}

/// Logs `reason` and terminates the process with the configured exit code.
#[deprecated(note = "log the error and exit from the binary's `main`")]
pub fn die_process(reason: impl Into<Reason>, settings: &RaiserSettings) -> ! {
    error!("{}", stringify_reason(&reason.into()));
    exit(settings.exit_code)
}
