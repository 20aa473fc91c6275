//! Error handling built on `thiserror`.
//!
//! This module provides the error object and raised-value types, plus the
//! operational helpers that raise from `Option`/`Result` and report raises.

pub mod domain;
pub mod operational;

pub use {
    domain::{BoxError, DieError, Result, TemplateError, Thrown},
    operational::{DieExt, ErrorReporter},
};
