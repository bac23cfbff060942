//! Extension trait that brings standard `Result` values into the outcome model.
//!
//! This is the boundary between code that reports failure through
//! `core::result::Result` and code built on [`TypedOutcome`].
//!
//! # Examples
//!
//! ```
//! use causal_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> TypedOutcome<u16> {
//!     raw.parse::<u16>().ctx("parsing port")
//! }
//!
//! let failed = parse_port("eighty");
//! assert_eq!(failed.error().unwrap().message(), "parsing port");
//! assert_eq!(failed.inner().unwrap().error().unwrap().kind(), "exception");
//! ```

use crate::errors::ExceptionError;
use crate::traits::IntoErrorRef;
use crate::types::{Failure, Outcome, TypedOutcome};

/// Converts a `Result<T, E>` into a [`TypedOutcome<T>`].
pub trait ResultExt<T, E> {
    /// Adapts the error with [`ExceptionError`].
    ///
    /// ```
    /// use causal_rail::errors::ExceptionError;
    /// use causal_rail::prelude::*;
    ///
    /// let outcome = "x".parse::<i32>().into_outcome();
    /// assert!(outcome.error().unwrap().is::<ExceptionError>());
    /// ```
    fn into_outcome(self) -> TypedOutcome<T>
    where
        E: core::error::Error + Send + Sync + 'static;

    /// Maps the error into any error kind.
    fn outcome_with<X, F>(self, f: F) -> TypedOutcome<T>
    where
        X: IntoErrorRef,
        F: FnOnce(E) -> X;

    /// Adapts the error with [`ExceptionError`] and wraps it under `context`.
    fn ctx<X>(self, context: X) -> TypedOutcome<T>
    where
        X: IntoErrorRef,
        E: core::error::Error + Send + Sync + 'static;

    /// Like [`ctx`](ResultExt::ctx), but only builds the context on failure.
    fn ctx_with<X, F>(self, f: F) -> TypedOutcome<T>
    where
        X: IntoErrorRef,
        F: FnOnce() -> X,
        E: core::error::Error + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> TypedOutcome<T>
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        self.outcome_with(ExceptionError::new)
    }

    #[inline]
    fn outcome_with<X, F>(self, f: F) -> TypedOutcome<T>
    where
        X: IntoErrorRef,
        F: FnOnce(E) -> X,
    {
        match self {
            Ok(value) => TypedOutcome::success(value),
            Err(error) => TypedOutcome::from_error(f(error)),
        }
    }

    #[inline]
    fn ctx<X>(self, context: X) -> TypedOutcome<T>
    where
        X: IntoErrorRef,
        E: core::error::Error + Send + Sync + 'static,
    {
        self.ctx_with(|| context)
    }

    #[inline]
    fn ctx_with<X, F>(self, f: F) -> TypedOutcome<T>
    where
        X: IntoErrorRef,
        F: FnOnce() -> X,
        E: core::error::Error + Send + Sync + 'static,
    {
        match self {
            Ok(value) => TypedOutcome::success(value),
            Err(error) => {
                let cause = Outcome::from_exception(error);
                TypedOutcome::from_failure(Failure::caused_by(f(), cause))
            },
        }
    }
}
