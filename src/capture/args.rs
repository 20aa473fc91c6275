//! Capture of call arguments as dynamic values.

use {
    serde::Serialize,
    serde_json::{Value, to_value},
    tracing::warn,
};

/// Argument tuple whose elements can be recorded in an error cause.
///
/// Implemented for tuples of up to eight `Serialize` elements. A function
/// taking one argument is called with a one-element tuple `(x,)`.
pub trait CallArgs {
    /// Records each argument in call order.
    fn capture(&self) -> Vec<Value>;
}

fn capture_one<T: Serialize>(position: usize, value: &T) -> Value {
    to_value(value).unwrap_or_else(|error| {
        warn!(position, error = %error, "Argument could not be captured");
        Value::Null
    })
}

macro_rules! impl_call_args {
    ($($name:ident : $index:tt),*) => {
        impl<$($name: Serialize),*> CallArgs for ($($name,)*) {
            fn capture(&self) -> Vec<Value> {
                vec![$(capture_one($index, &self.$index)),*]
            }
        }
    };
}

impl_call_args!();
impl_call_args!(A: 0);
impl_call_args!(A: 0, B: 1);
impl_call_args!(A: 0, B: 1, C: 2);
impl_call_args!(A: 0, B: 1, C: 2, D: 3);
impl_call_args!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_call_args!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
impl_call_args!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
impl_call_args!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);
