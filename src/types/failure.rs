//! The failure payload shared by [`Outcome`] and [`TypedOutcome`](crate::TypedOutcome).
//!
//! A [`Failure`] pairs the error that explains it with an optional, exclusively
//! owned cause. Causes are themselves failed outcomes, so walking
//! [`Failure::chain`] from the outermost failure ends at the root cause.

use core::fmt::{self, Display};
use core::iter::FusedIterator;

use crate::traits::{ErrorCapability, ErrorRef, IntoErrorRef};
use crate::types::alloc_type::{Box, Cow, String};
use crate::types::error_formatter::{labeled, ChainFormatBuilder, ErrorFormatter};
use crate::types::{ChainReport, Outcome};

/// The error half of an outcome: an error object plus an optional owned cause.
#[derive(Debug, Clone)]
pub struct Failure {
    pub(crate) error: ErrorRef,
    pub(crate) inner: Option<Box<Outcome>>,
}

impl Failure {
    /// Creates a terminal failure with no recorded cause.
    #[inline]
    pub fn new<E: IntoErrorRef>(error: E) -> Self {
        Self { error: error.into_error_ref(), inner: None }
    }

    /// Creates a failure that records `cause` as its inner failure.
    ///
    /// # Panics
    ///
    /// Panics if `cause` is a success. Use [`Failure::try_caused_by`] to get a
    /// [`NotAFailure`] error instead.
    #[track_caller]
    pub fn caused_by<E, C>(error: E, cause: C) -> Self
    where
        E: IntoErrorRef,
        C: Into<Outcome>,
    {
        match Self::try_caused_by(error, cause) {
            Ok(failure) => failure,
            Err(violation) => panic!("{}", violation),
        }
    }

    /// Fallible form of [`Failure::caused_by`].
    pub fn try_caused_by<E, C>(error: E, cause: C) -> Result<Self, NotAFailure>
    where
        E: IntoErrorRef,
        C: Into<Outcome>,
    {
        let cause = cause.into();
        if cause.is_success() {
            return Err(NotAFailure);
        }
        Ok(Self { error: error.into_error_ref(), inner: Some(Box::new(cause)) })
    }

    /// Re-records a failed outcome as the cause of a new failure carrying the
    /// same error handle.
    pub fn try_lift<C: Into<Outcome>>(other: C) -> Result<Self, NotAFailure> {
        let other = other.into();
        let error = match other.failure() {
            Some(failure) => failure.error.clone(),
            None => return Err(NotAFailure),
        };
        Ok(Self { error, inner: Some(Box::new(other)) })
    }

    /// The error that directly explains this failure.
    #[inline]
    pub fn error(&self) -> &ErrorRef {
        &self.error
    }

    /// Shorthand for `self.error().message()`.
    #[inline]
    pub fn message(&self) -> Cow<'_, str> {
        self.error.message()
    }

    /// Shorthand for `self.error().kind()`.
    #[inline]
    pub fn kind(&self) -> &'static str {
        self.error.kind()
    }

    /// The failed outcome recorded as the cause, if any.
    #[inline]
    pub fn inner(&self) -> Option<&Outcome> {
        self.inner.as_deref()
    }

    /// The failure payload of [`inner`](Failure::inner).
    #[inline]
    pub fn cause(&self) -> Option<&Failure> {
        self.inner().and_then(Outcome::failure)
    }

    /// Iterates from this failure down to the root cause.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// The innermost failure of the chain (`self` when there is no cause).
    pub fn root_cause(&self) -> &Failure {
        let mut current = self;
        while let Some(cause) = current.cause() {
            current = cause;
        }
        current
    }

    /// Number of failures in the chain, this one included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.chain().count()
    }

    /// Splits the failure into its error and its cause.
    #[inline]
    pub fn into_parts(mut self) -> (ErrorRef, Option<Outcome>) {
        let inner = self.inner.take().map(|inner| *inner);
        (self.error.clone(), inner)
    }

    /// Returns a builder for customizing how the chain is rendered.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> ChainFormatBuilder<'_> {
        ChainFormatBuilder::new(self)
    }

    /// Renders the chain with the default formatter, outermost failure first.
    ///
    /// ```
    /// use causal_rail::Outcome;
    ///
    /// let root = Outcome::from_error("connection refused");
    /// let outer = Outcome::wrap("loading profile", root);
    /// assert_eq!(
    ///     outer.failure().unwrap().error_chain(),
    ///     "loading profile -> connection refused"
    /// );
    /// ```
    #[must_use]
    pub fn error_chain(&self) -> String {
        use alloc::string::ToString;
        self.fmt().to_string()
    }

    /// Renders the chain with a custom formatter.
    #[must_use]
    pub fn error_chain_with<F: ErrorFormatter>(&self, formatter: F) -> String {
        use crate::types::alloc_type::Vec;

        let show_kind = formatter.show_kind();
        let messages: Vec<Cow<'_, str>> =
            self.chain().map(|link| labeled(link.kind(), link.message(), show_kind)).collect();
        formatter.format_chain(&messages)
    }

    /// Takes an owned snapshot of every link's kind and message.
    #[must_use]
    pub fn report(&self) -> ChainReport {
        ChainReport::from_failure(self)
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return Display::fmt(&self.fmt(), f);
        }
        Display::fmt(&self.fmt().cascaded(), f)
    }
}

impl Drop for Failure {
    // Unlinks the chain one box at a time so long chains do not recurse.
    fn drop(&mut self) {
        let mut next = self.inner.take();
        while let Some(mut outcome) = next {
            next = outcome.failure.as_mut().and_then(|failure| failure.inner.take());
        }
    }
}

impl core::error::Error for Failure {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause().map(|cause| cause as &(dyn core::error::Error + 'static))
    }
}

/// Iterator over a causal chain, outermost failure first.
///
/// Created by [`Failure::chain`] and the `chain` methods on outcomes.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    pub(crate) next: Option<&'a Failure>,
}

impl<'a> Chain<'a> {
    pub(crate) fn empty() -> Self {
        Self { next: None }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Failure;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// Returned when a successful outcome is offered as the cause of a failure.
///
/// Causes are always failures; wrapping a success would leave a link in the
/// chain with nothing to explain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotAFailure;

impl Display for NotAFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a successful outcome cannot be recorded as a failure cause")
    }
}

impl core::error::Error for NotAFailure {}

impl ErrorCapability for NotAFailure {
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed("a successful outcome cannot be recorded as a failure cause")
    }

    fn kind(&self) -> &'static str {
        "not_a_failure"
    }
}
