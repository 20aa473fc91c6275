//! String forms shared by templates, raw raised values, and legacy aliases.

use serde_json::Value;

use crate::raise::reason::Reason;

/// Renders a dynamic value the way it appears inside a message.
///
/// Strings are written without quotes; `null`, numbers and booleans use
/// their literal form; arrays and objects use compact JSON.
#[must_use]
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Flattens any reason into a single message line.
///
/// Messages are trimmed, templates are joined, errors contribute their
/// message, and raw values are stringified.
///
/// # Arguments
///
/// * `reason` - Reason to flatten.
///
/// # Returns
///
/// The message text.
#[must_use]
pub fn stringify_reason(reason: &Reason) -> String {
    match reason {
        Reason::Message(text) => text.trim().to_string(),
        Reason::Template(template) => template.join(),
        Reason::Error(error) => error.message().to_string(),
        Reason::Raw(value) => stringify(value),
        Reason::SideEffect { .. } => "[callback]".to_string(),
    }
}
