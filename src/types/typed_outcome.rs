//! [`TypedOutcome`]: success with a payload, or a failure with its causal chain.

use core::fmt::{self, Display};

use crate::errors::ExceptionError;
use crate::traits::{ErrorRef, IntoErrorRef};
use crate::types::alloc_type::Box;
use crate::types::{Chain, Failure, NotAFailure, Outcome};

/// Success carrying a `T`, or a [`Failure`].
///
/// Shaped exactly like [`Outcome`] apart from the payload. It degrades to an
/// [`Outcome`] with [`discard`](TypedOutcome::discard) (or `From`), keeping the
/// error and chain.
///
/// # Examples
///
/// ```
/// use causal_rail::errors::NotFoundError;
/// use causal_rail::prelude::*;
///
/// fn find_port(name: &str) -> TypedOutcome<u16> {
///     match name {
///         "http" => TypedOutcome::success(80),
///         _ => TypedOutcome::from_error(NotFoundError::new("service").with_key(name)),
///     }
/// }
///
/// assert_eq!(find_port("http").map(|p| p + 8000).into_value(), Some(8080));
///
/// let missing = find_port("gopher");
/// assert_eq!(missing.error().unwrap().message(), "service `gopher` not found");
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct TypedOutcome<T> {
    pub(crate) repr: Result<T, Failure>,
}

impl<T> TypedOutcome<T> {
    #[inline]
    pub const fn success(value: T) -> Self {
        Self { repr: Ok(value) }
    }

    /// A failure caused directly by `error`, with no inner failure.
    #[inline]
    pub fn from_error<E: IntoErrorRef>(error: E) -> Self {
        Self::from_failure(Failure::new(error))
    }

    #[inline]
    pub fn from_failure(failure: Failure) -> Self {
        Self { repr: Err(failure) }
    }

    /// A failure caused by `error` that records `wrapped` as its inner failure.
    ///
    /// # Panics
    ///
    /// Panics if `wrapped` is a success.
    #[track_caller]
    pub fn wrap<E, W>(error: E, wrapped: W) -> Self
    where
        E: IntoErrorRef,
        W: Into<Outcome>,
    {
        Self::from_failure(Failure::caused_by(error, wrapped))
    }

    /// Like [`TypedOutcome::wrap`], but reports a successful `wrapped` as [`NotAFailure`].
    #[inline]
    pub fn try_wrap<E, W>(error: E, wrapped: W) -> Result<Self, NotAFailure>
    where
        E: IntoErrorRef,
        W: Into<Outcome>,
    {
        Failure::try_caused_by(error, wrapped).map(Self::from_failure)
    }

    /// Lifts a failed outcome of any payload type into this payload type.
    ///
    /// See [`Outcome::lift`].
    ///
    /// # Panics
    ///
    /// Panics if `other` is a success.
    #[track_caller]
    pub fn lift<O: Into<Outcome>>(other: O) -> Self {
        match Self::try_lift(other) {
            Ok(outcome) => outcome,
            Err(violation) => panic!("{}", violation),
        }
    }

    #[inline]
    pub fn try_lift<O: Into<Outcome>>(other: O) -> Result<Self, NotAFailure> {
        Failure::try_lift(other).map(Self::from_failure)
    }

    /// Adapts a native error into an [`ExceptionError`] failure.
    #[inline]
    pub fn from_exception<E>(exception: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self::from_error(ExceptionError::new(exception))
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.repr.is_ok()
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        self.repr.is_err()
    }

    /// The payload, `None` on failure.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.repr.as_ref().ok()
    }

    #[inline]
    pub fn into_value(self) -> Option<T> {
        self.repr.ok()
    }

    /// The error that caused this failure, `None` on success.
    #[inline]
    pub fn error(&self) -> Option<&ErrorRef> {
        self.failure().map(Failure::error)
    }

    /// The failure recorded as the cause of this one, if any.
    #[inline]
    pub fn inner(&self) -> Option<&Outcome> {
        self.failure().and_then(Failure::inner)
    }

    #[inline]
    pub fn failure(&self) -> Option<&Failure> {
        self.repr.as_ref().err()
    }

    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        match &self.repr {
            Ok(_) => Chain::empty(),
            Err(failure) => failure.chain(),
        }
    }

    #[inline]
    pub fn root_cause(&self) -> Option<&Failure> {
        self.failure().map(Failure::root_cause)
    }

    /// Transforms the payload. On failure `transform` is not called and the
    /// error and inner failure move into the result unchanged.
    #[inline]
    pub fn map<U, F>(self, transform: F) -> TypedOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        TypedOutcome { repr: self.repr.map(transform) }
    }

    /// Replaces the payload with an already computed `value`.
    ///
    /// The eager counterpart of [`map`](TypedOutcome::map), matching
    /// [`Outcome::map`].
    #[inline]
    pub fn replace<U>(self, value: U) -> TypedOutcome<U> {
        match self.repr {
            Ok(_) => TypedOutcome::success(value),
            Err(failure) => TypedOutcome::from_failure(failure),
        }
    }

    /// Chains a step that can itself fail.
    #[inline]
    pub fn and_then<U, F>(self, step: F) -> TypedOutcome<U>
    where
        F: FnOnce(T) -> TypedOutcome<U>,
    {
        match self.repr {
            Ok(value) => step(value),
            Err(failure) => TypedOutcome::from_failure(failure),
        }
    }

    /// Folds into a plain value: `on_success` as is (the payload is dropped),
    /// or whatever `on_error` returns for the error and inner failure.
    #[inline]
    pub fn map_or_else<U, F>(self, on_success: U, on_error: F) -> U
    where
        F: FnOnce(ErrorRef, Option<Outcome>) -> U,
    {
        self.fold(|_| on_success, on_error)
    }

    /// Folds into a plain value, feeding the payload to `on_success`.
    #[inline]
    pub fn fold<U, S, F>(self, on_success: S, on_error: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(ErrorRef, Option<Outcome>) -> U,
    {
        match self.repr {
            Ok(value) => on_success(value),
            Err(failure) => {
                let (error, inner) = failure.into_parts();
                on_error(error, inner)
            },
        }
    }

    /// Replaces the error of a failure, keeping its inner failure.
    ///
    /// A success is returned unchanged and `mapper` is not called.
    pub fn map_error<X, F>(self, mapper: F) -> Self
    where
        X: IntoErrorRef,
        F: FnOnce(ErrorRef, Option<&Outcome>) -> X,
    {
        match self.repr {
            Ok(value) => Self::success(value),
            Err(mut failure) => {
                failure.error = mapper(failure.error.clone(), failure.inner()).into_error_ref();
                Self::from_failure(failure)
            },
        }
    }

    /// Replaces both the error and the inner failure of a failure.
    ///
    /// A success is returned unchanged and `mapper` is not called.
    ///
    /// # Panics
    ///
    /// Panics if `mapper` returns a success as the new inner failure.
    #[track_caller]
    pub fn map_error_with<X, F>(self, mapper: F) -> Self
    where
        X: IntoErrorRef,
        F: FnOnce(ErrorRef, Option<Outcome>) -> (X, Outcome),
    {
        match self.repr {
            Ok(value) => Self::success(value),
            Err(failure) => {
                let (error, inner) = failure.into_parts();
                let (error, inner) = mapper(error, inner);
                Self::wrap(error, inner)
            },
        }
    }

    /// Adds a layer of context: on failure, returns a new failure caused by
    /// `error` whose inner failure is `self` degraded to an [`Outcome`].
    #[inline]
    pub fn with_context<E: IntoErrorRef>(self, error: E) -> Self {
        match self.repr {
            Ok(value) => Self::success(value),
            Err(failure) => Self::from_failure(Failure {
                error: error.into_error_ref(),
                inner: Some(Box::new(Outcome::from_failure(failure))),
            }),
        }
    }

    /// Drops the payload, keeping the error and chain.
    #[inline]
    pub fn discard(self) -> Outcome {
        match self.repr {
            Ok(_) => Outcome::success(),
            Err(failure) => Outcome::from_failure(failure),
        }
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, Failure> {
        self.repr
    }
}

impl<T> Display for TypedOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Ok(_) => f.write_str("success"),
            Err(failure) => Display::fmt(failure, f),
        }
    }
}
