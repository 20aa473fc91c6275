//! Classified input of a raise.
//!
//! Call sites pick a variant through the `From` adapters below or through
//! [`Reason::side_effect`]; the raiser itself never inspects shapes.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use {anyhow::Result as AnyhowResult, serde_json::Value};

use crate::{error::DieError, raise::template::Template};

type CallbackFn = dyn FnOnce(&[Value]) -> AnyhowResult<()> + Send + Sync + 'static;

/// Side-effect function invoked with the slots of a raise.
pub struct Callback(Box<CallbackFn>);

impl Callback {
    /// Boxes a side-effect function.
    pub fn new<F>(callback: F) -> Self
    where
        F: FnOnce(&[Value]) -> AnyhowResult<()> + Send + Sync + 'static,
    {
        Self(Box::new(callback))
    }

    /// Invokes the callback, consuming it.
    ///
    /// # Errors
    ///
    /// Returns whatever error the callback itself returns.
    pub fn invoke(self, slots: &[Value]) -> AnyhowResult<()> {
        (self.0)(slots)
    }
}

impl Debug for Callback {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Callback")
    }
}

/// What a raise was asked to raise.
#[derive(Debug)]
pub enum Reason {
    /// Message text, trimmed when raised.
    Message(String),
    /// Fragments and interpolated values.
    Template(Template),
    /// An existing error, raised unchanged.
    Error(DieError),
    /// A callback to run with `slots` before raising.
    SideEffect { callback: Callback, slots: Vec<Value> },
    /// Any other value, raised as given.
    Raw(Value),
}

impl Reason {
    /// Classifies a callback and its slots.
    ///
    /// # Arguments
    ///
    /// * `callback` - Side-effect function, e.g. a notifier.
    /// * `slots` - Values passed to the callback and recorded as the cause.
    ///
    /// # Returns
    ///
    /// A `Reason::SideEffect`.
    pub fn side_effect<F>(callback: F, slots: Vec<Value>) -> Self
    where
        F: FnOnce(&[Value]) -> AnyhowResult<()> + Send + Sync + 'static,
    {
        Self::SideEffect {
            callback: Callback::new(callback),
            slots,
        }
    }

    /// A bare callback with no slots. It is raised without being invoked.
    pub fn callable<F>(callback: F) -> Self
    where
        F: FnOnce(&[Value]) -> AnyhowResult<()> + Send + Sync + 'static,
    {
        Self::side_effect(callback, Vec::new())
    }

    /// The absent reason, raised as `null`.
    #[must_use]
    pub fn none() -> Self {
        Self::Raw(Value::Null)
    }
}

impl From<&str> for Reason {
    fn from(text: &str) -> Self {
        Self::Message(text.to_string())
    }
}

impl From<String> for Reason {
    fn from(text: String) -> Self {
        Self::Message(text)
    }
}

impl From<Template> for Reason {
    fn from(template: Template) -> Self {
        Self::Template(template)
    }
}

impl From<DieError> for Reason {
    fn from(error: DieError) -> Self {
        Self::Error(error)
    }
}

impl From<Value> for Reason {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Message(text),
            other => Self::Raw(other),
        }
    }
}

impl<T> From<Option<T>> for Reason
where
    T: Into<Reason>,
{
    fn from(reason: Option<T>) -> Self {
        reason.map_or_else(Self::none, Into::into)
    }
}
