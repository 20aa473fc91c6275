//! phpdie - Expression-Position Raising
//!
//! Raise an error from anywhere a value is expected, and let wrapped
//! functions report the arguments that made them fail. Raising classifies
//! its reason (message, template, existing error, side-effect callback, or
//! raw value) and shapes the raised value accordingly; argument capture
//! merges call arguments into an error's `cause` without losing what was
//! already there.

pub mod capture;
pub mod config;
pub mod error;
pub mod legacy;
pub mod raise;

// Re-export key types for convenience
pub use {
    capture::{CallArgs, CatchArgs, Enrich, catch_args},
    config::{RaiserSettings, SettingsError},
    error::{DieError, DieExt, ErrorReporter, Thrown},
    raise::{Raiser, Reason, Template, die, raise},
};
