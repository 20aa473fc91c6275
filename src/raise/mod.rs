//! Expression-position raising.
//!
//! A [`Reason`] is turned into a [`Thrown`] value by fixed rules: templates
//! are joined, existing errors pass through untouched, side-effect callbacks
//! run before a marker error is raised, messages are trimmed, and anything
//! else is raised exactly as given.

use std::panic::{AssertUnwindSafe, catch_unwind};

use serde_json::{Map, Value};

use crate::{
    config::RaiserSettings,
    error::{DieError, Thrown},
};

pub mod reason;
pub mod stringify;
pub mod template;

pub use {
    reason::{Callback, Reason},
    stringify::{stringify, stringify_reason},
    template::{Interpolation, Template},
};

/// Raiser bound to a set of settings.
///
/// The free functions [`raise`] and [`die`] use `RaiserSettings::default()`.
#[derive(Debug, Clone, Default)]
pub struct Raiser {
    /// Marker message of side-effect raises.
    settings: RaiserSettings,
}

impl Raiser {
    /// Creates a raiser with the given settings.
    #[must_use]
    pub fn new(settings: RaiserSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &RaiserSettings {
        &self.settings
    }

    /// Builds the value a raise of `reason` transfers to the failure handler.
    ///
    /// # Arguments
    ///
    /// * `reason` - What to raise.
    ///
    /// # Returns
    ///
    /// The raised value. This never fails: every reason has a defined outcome.
    pub fn raise(&self, reason: impl Into<Reason>) -> Thrown {
        match reason.into() {
            Reason::Template(template) => {
                Thrown::Error(DieError::new(template.join().trim()))
            }
            Reason::Error(error) => Thrown::Error(error),
            Reason::SideEffect { callback, slots } if !slots.is_empty() => {
                run_side_effect(callback, &slots);
                let mut cause = Map::new();
                cause.insert("args".to_string(), Value::Array(slots));
                Thrown::Error(
                    DieError::new(self.settings.marker.clone()).with_cause(Value::Object(cause)),
                )
            }
            Reason::SideEffect { callback, .. } => Thrown::Callback(callback),
            Reason::Message(text) => Thrown::Error(DieError::new(text.trim())),
            Reason::Raw(value) => Thrown::Value(value),
        }
    }

    /// Raises `reason` in expression position.
    ///
    /// # Errors
    ///
    /// Always returns `Err` with the value built by [`Raiser::raise`].
    pub fn die<T>(&self, reason: impl Into<Reason>) -> Result<T, Thrown> {
        Err(self.raise(reason))
    }
}

/// Runs a side-effect callback for its effect only.
///
/// Both an error return and a panic are dropped here and nothing is logged.
/// A panic still passes through the process panic hook first, which by
/// default prints the panic message to stderr; install a quiet hook to
/// silence it.
fn run_side_effect(callback: Callback, slots: &[Value]) {
    let _ = catch_unwind(AssertUnwindSafe(|| callback.invoke(slots)));
}

/// Builds the value raised for `reason` with default settings.
pub fn raise(reason: impl Into<Reason>) -> Thrown {
    Raiser::default().raise(reason)
}

/// Raises `reason` in expression position with default settings.
///
/// ```
/// use phpdie::{die, error::Thrown};
///
/// fn port(raw: Option<&str>) -> Result<u16, Thrown> {
///     let raw = match raw {
///         Some(raw) => raw,
///         None => return die("PORT not set"),
///     };
///     raw.parse().or_else(|_| die(format!("Invalid PORT value: {raw}")))
/// }
///
/// assert_eq!(port(None).unwrap_err().to_string(), "PORT not set");
/// ```
///
/// # Errors
///
/// Always returns `Err`.
pub fn die<T>(reason: impl Into<Reason>) -> Result<T, Thrown> {
    Err(raise(reason))
}
