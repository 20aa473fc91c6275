//! Literal fragments interleaved with interpolated values.

use serde_json::Value;

use crate::{
    error::{DieError, TemplateError, Thrown},
    raise::stringify::stringify,
};

/// A value placed between two template fragments.
#[derive(Debug, Clone, PartialEq)]
pub enum Interpolation {
    /// A plain value, rendered with [`stringify`].
    Value(Value),
    /// The message text of an interpolated error.
    ErrorMessage(String),
}

impl Interpolation {
    /// Renders the value as it appears in the joined message.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Value(value) => stringify(value),
            Self::ErrorMessage(message) => message.clone(),
        }
    }
}

impl From<Value> for Interpolation {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&DieError> for Interpolation {
    fn from(error: &DieError) -> Self {
        Self::ErrorMessage(error.message().to_string())
    }
}

impl From<DieError> for Interpolation {
    fn from(error: DieError) -> Self {
        Self::from(&error)
    }
}

impl From<&Thrown> for Interpolation {
    fn from(thrown: &Thrown) -> Self {
        match thrown {
            Thrown::Value(value) => Self::Value(value.clone()),
            other => Self::ErrorMessage(other.message()),
        }
    }
}

macro_rules! interpolation_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Interpolation {
                fn from(value: $ty) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )*
    };
}

interpolation_from_scalar!(&str, String, bool, i32, i64, u32, u64, usize, f64);

/// Ordered literal fragments with one interpolation between each pair.
///
/// Always holds exactly one more fragment than values.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    /// Literal fragments.
    parts: Vec<String>,
    /// Interpolated values.
    values: Vec<Interpolation>,
}

impl Template {
    /// Creates a template from fragments and values.
    ///
    /// # Arguments
    ///
    /// * `parts` - Literal fragments, in order.
    /// * `values` - Interpolated values, one fewer than `parts`.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `Template` or a `TemplateError`.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::ArityMismatch` if `parts.len() != values.len() + 1`.
    pub fn new<S>(parts: Vec<S>, values: Vec<Interpolation>) -> Result<Self, TemplateError>
    where
        S: Into<String>,
    {
        if parts.len() != values.len() + 1 {
            return Err(TemplateError::ArityMismatch {
                parts: parts.len(),
                values: values.len(),
            });
        }

        Ok(Self {
            parts: parts.into_iter().map(Into::into).collect(),
            values,
        })
    }

    /// Creates a template with a single fragment and no values.
    pub fn fragment(text: impl Into<String>) -> Self {
        Self {
            parts: vec![text.into()],
            values: Vec::new(),
        }
    }

    /// Splits `pattern` on `{}` placeholders and pairs the pieces with `values`.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::ArityMismatch` if the placeholder count differs
    /// from the number of values.
    pub fn parse(pattern: &str, values: Vec<Interpolation>) -> Result<Self, TemplateError> {
        Self::new(pattern.split("{}").collect(), values)
    }

    #[must_use]
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    #[must_use]
    pub fn values(&self) -> &[Interpolation] {
        &self.values
    }

    /// Joins fragments and rendered values pairwise.
    ///
    /// The result is not trimmed.
    #[must_use]
    pub fn join(&self) -> String {
        let mut joined = String::new();
        for (index, part) in self.parts.iter().enumerate() {
            joined.push_str(part);
            if let Some(value) = self.values.get(index) {
                joined.push_str(&value.render());
            }
        }
        joined
    }
}

/// Builds a [`Template`] from a `{}` pattern and interpolated expressions.
///
/// Expands to a `Result<Template, TemplateError>`.
///
/// ```
/// use phpdie::template;
///
/// let template = template!("User {} cannot {} this resource", 123, "delete").unwrap();
/// assert_eq!(template.join(), "User 123 cannot delete this resource");
/// ```
#[macro_export]
macro_rules! template {
    ($pattern:expr $(, $value:expr)* $(,)?) => {
        $crate::raise::template::Template::parse(
            $pattern,
            vec![$($crate::raise::template::Interpolation::from($value)),*],
        )
    };
}
