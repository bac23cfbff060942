//! [`Outcome`]: success without a payload, or a failure with its causal chain.

use core::fmt::{self, Display};

use crate::errors::ExceptionError;
use crate::traits::{ErrorRef, IntoErrorRef};
use crate::types::alloc_type::Box;
use crate::types::{Chain, Failure, NotAFailure, TypedOutcome};

/// Success carrying nothing, or a [`Failure`].
///
/// Outcomes are built once and never change; every combinator consumes the
/// receiver and returns a new value.
///
/// # Examples
///
/// ```
/// use causal_rail::errors::MessageError;
/// use causal_rail::prelude::*;
///
/// let root = Outcome::from_error(MessageError::new("boom"));
/// let outer = Outcome::wrap(MessageError::new("context"), root);
///
/// assert!(!outer.is_success());
/// assert_eq!(outer.error().unwrap().message(), "context");
/// assert_eq!(outer.inner().unwrap().error().unwrap().message(), "boom");
/// ```
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    pub(crate) failure: Option<Failure>,
}

impl Outcome {
    /// A successful outcome.
    #[inline]
    pub const fn success() -> Self {
        Self { failure: None }
    }

    /// A failure caused directly by `error`, with no inner failure.
    #[inline]
    pub fn from_error<E: IntoErrorRef>(error: E) -> Self {
        Self::from_failure(Failure::new(error))
    }

    /// Wraps an existing failure payload.
    #[inline]
    pub fn from_failure(failure: Failure) -> Self {
        Self { failure: Some(failure) }
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

    /// Like [`Outcome::wrap`], but reports a successful `wrapped` as [`NotAFailure`].
    #[inline]
    pub fn try_wrap<E, W>(error: E, wrapped: W) -> Result<Self, NotAFailure>
    where
        E: IntoErrorRef,
        W: Into<Outcome>,
    {
        Failure::try_caused_by(error, wrapped).map(Self::from_failure)
    }

    /// Lifts a failed outcome of any payload type into a unit outcome.
    ///
    /// The new failure carries the same error handle as `other`, and `other`
    /// itself becomes the inner failure, so its own chain is kept intact.
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

    /// Like [`Outcome::lift`], but reports a successful `other` as [`NotAFailure`].
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
        self.failure.is_none()
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }

    /// The error that caused this failure, `None` on success.
    #[inline]
    pub fn error(&self) -> Option<&ErrorRef> {
        self.failure.as_ref().map(Failure::error)
    }

    /// The failure recorded as the cause of this one, if any.
    #[inline]
    pub fn inner(&self) -> Option<&Outcome> {
        self.failure.as_ref().and_then(Failure::inner)
    }

    #[inline]
    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    #[inline]
    pub fn into_failure(self) -> Option<Failure> {
        self.failure
    }

    /// Iterates the causal chain, outermost first. Empty on success.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        match &self.failure {
            Some(failure) => failure.chain(),
            None => Chain::empty(),
        }
    }

    /// The innermost failure of the chain, `None` on success.
    #[inline]
    pub fn root_cause(&self) -> Option<&Failure> {
        self.failure.as_ref().map(Failure::root_cause)
    }

    /// Promotes to a [`TypedOutcome`] carrying `value` on success.
    ///
    /// `value` is already computed; on failure it is dropped and the error and
    /// inner failure move into the result unchanged.
    #[inline]
    pub fn map<U>(self, value: U) -> TypedOutcome<U> {
        match self.failure {
            None => TypedOutcome::success(value),
            Some(failure) => TypedOutcome::from_failure(failure),
        }
    }

    /// Folds into a plain value: `on_success` as is, or whatever `on_error`
    /// returns for the error and inner failure.
    ///
    /// ```
    /// use causal_rail::Outcome;
    ///
    /// let ok = Outcome::success().map_or_else(2, |_, _| 1);
    /// let failed = Outcome::from_error("boom").map_or_else(2, |_, _| 1);
    /// assert_eq!((ok, failed), (2, 1));
    /// ```
    #[inline]
    pub fn map_or_else<U, F>(self, on_success: U, on_error: F) -> U
    where
        F: FnOnce(ErrorRef, Option<Outcome>) -> U,
    {
        match self.failure {
            None => on_success,
            Some(failure) => {
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
        match self.failure {
            None => Self::success(),
            Some(mut failure) => {
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
        match self.failure {
            None => Self::success(),
            Some(failure) => {
                let (error, inner) = failure.into_parts();
                let (error, inner) = mapper(error, inner);
                Self::wrap(error, inner)
            },
        }
    }

    /// Adds a layer of context: on failure, returns a new failure caused by
    /// `error` whose inner failure is `self`. A success passes through.
    #[inline]
    pub fn with_context<E: IntoErrorRef>(self, error: E) -> Self {
        if self.is_success() {
            return self;
        }
        Self::from_failure(Failure { error: error.into_error_ref(), inner: Some(Box::new(self)) })
    }

    /// Converts into a standard `Result` so `?` can be used in functions
    /// returning `Result<_, Failure>`.
    #[inline]
    pub fn into_result(self) -> Result<(), Failure> {
        match self.failure {
            None => Ok(()),
            Some(failure) => Err(failure),
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.failure {
            None => f.write_str("success"),
            Some(failure) => Display::fmt(failure, f),
        }
    }
}
