//! Attaching call arguments to the errors a function fails with.
//!
//! `catch_args(f)` returns a wrapper with the same success behavior as `f`.
//! When `f` fails with an error object, the wrapper records the arguments of
//! the failing call under `cause.args` and hands the same error back:
//!
//! ```
//! use phpdie::{capture::catch_args, die, error::Thrown};
//! use serde_json::json;
//!
//! let divide = catch_args(|(a, b): (i64, i64)| {
//!     if b == 0 {
//!         return die::<i64>("division by zero");
//!     }
//!     Ok(a / b)
//! });
//!
//! assert_eq!(divide.call((6, 3)).unwrap(), 2);
//! let error = divide.call((1, 0)).unwrap_err();
//! assert_eq!(error.to_string(), "division by zero");
//! assert_eq!(error.as_error().unwrap().cause(), Some(&json!({ "args": [1, 0] })));
//! ```

use std::future::Future;

pub mod args;
pub mod enrich;

pub use {
    args::CallArgs,
    enrich::{Enrich, enrich},
};

/// Wrapper that enriches failures of `F` with the failing call's arguments.
///
/// Holds nothing but the wrapped function.
#[derive(Debug, Clone, Copy)]
pub struct CatchArgs<F> {
    inner: F,
}

/// Wraps `inner` so its failures carry the arguments they were called with.
pub fn catch_args<F>(inner: F) -> CatchArgs<F> {
    CatchArgs { inner }
}

impl<F> CatchArgs<F> {
    /// Gets the wrapped function.
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Calls a synchronous function.
    ///
    /// # Arguments
    ///
    /// * `args` - Argument tuple passed to the wrapped function.
    ///
    /// # Returns
    ///
    /// The wrapped function's result, unchanged on success.
    ///
    /// # Errors
    ///
    /// Returns the wrapped function's error, enriched with `args`.
    pub fn call<A, R, E>(&self, args: A) -> Result<R, E>
    where
        F: Fn(A) -> Result<R, E>,
        A: CallArgs,
        E: Enrich,
    {
        let captured = args.capture();
        (self.inner)(args).map_err(|error| error.enrich(captured))
    }

    /// Calls a function that returns a future.
    ///
    /// The returned future resolves to the inner future's output, with a
    /// failure enriched once it settles. Dropping it before it settles drops
    /// the inner future and skips enrichment.
    pub fn call_async<A, Fut, R, E>(
        &self,
        args: A,
    ) -> impl Future<Output = Result<R, E>> + use<F, A, Fut, R, E>
    where
        F: Fn(A) -> Fut,
        Fut: Future<Output = Result<R, E>>,
        A: CallArgs,
        E: Enrich,
    {
        let captured = args.capture();
        let pending = (self.inner)(args);
        async move { pending.await.map_err(|error| error.enrich(captured)) }
    }

    /// Calls a function that may fail before producing its future.
    ///
    /// # Errors
    ///
    /// Returns the immediate failure, enriched with `args`. A failure of the
    /// produced future is enriched when it settles.
    pub fn try_call_async<A, Fut, R, E>(
        &self,
        args: A,
    ) -> Result<impl Future<Output = Result<R, E>> + use<F, A, Fut, R, E>, E>
    where
        F: Fn(A) -> Result<Fut, E>,
        Fut: Future<Output = Result<R, E>>,
        A: CallArgs,
        E: Enrich,
    {
        let captured = args.capture();
        match (self.inner)(args) {
            Ok(pending) => Ok(async move { pending.await.map_err(|error| error.enrich(captured)) }),
            Err(error) => Err(error.enrich(captured)),
        }
    }

    /// Turns the wrapper into a closure with the wrapped function's signature.
    pub fn into_fn<A, R, E>(self) -> impl Fn(A) -> Result<R, E>
    where
        F: Fn(A) -> Result<R, E>,
        A: CallArgs,
        E: Enrich,
    {
        move |args| self.call(args)
    }
}

#[cfg(test)]
mod tests;
