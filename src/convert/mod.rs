//! Conversions between outcomes, failures, error values and standard `Result`.
//!
//! - any [`ErrorCapability`] value converts into a failed [`Outcome`] or
//!   [`TypedOutcome`] (the same as `from_error`)
//! - [`TypedOutcome<T>`] degrades into [`Outcome`], keeping error and chain
//! - outcomes and `Result<_, Failure>` convert both ways
//! - with the `std` feature, [`Outcome::catch`] and [`TypedOutcome::catch`]
//!   turn a panic into an [`ExceptionError`](crate::errors::ExceptionError) failure
//!
//! # Examples
//!
//! ```
//! use causal_rail::errors::MessageError;
//! use causal_rail::{Failure, Outcome, TypedOutcome};
//!
//! let failed: Outcome = MessageError::new("quota exceeded").into();
//! assert!(failed.is_failure());
//!
//! let typed: TypedOutcome<u8> = TypedOutcome::success(7);
//! let unit: Outcome = typed.into();
//! assert!(unit.is_success());
//!
//! let result: Result<u8, Failure> = TypedOutcome::<u8>::from_error("nope").into();
//! assert_eq!(result.unwrap_err().message(), "nope");
//! ```

use crate::traits::ErrorCapability;
use crate::types::{Failure, Outcome, TypedOutcome};

impl<E: ErrorCapability> From<E> for Outcome {
    #[inline]
    fn from(error: E) -> Self {
        Self::from_error(error)
    }
}

impl<T, E: ErrorCapability> From<E> for TypedOutcome<T> {
    #[inline]
    fn from(error: E) -> Self {
        Self::from_error(error)
    }
}

impl From<Failure> for Outcome {
    #[inline]
    fn from(failure: Failure) -> Self {
        Self::from_failure(failure)
    }
}

impl<T> From<Failure> for TypedOutcome<T> {
    #[inline]
    fn from(failure: Failure) -> Self {
        Self::from_failure(failure)
    }
}

impl<T> From<TypedOutcome<T>> for Outcome {
    #[inline]
    fn from(outcome: TypedOutcome<T>) -> Self {
        outcome.discard()
    }
}

impl From<Result<(), Failure>> for Outcome {
    #[inline]
    fn from(result: Result<(), Failure>) -> Self {
        Self { failure: result.err() }
    }
}

impl From<Outcome> for Result<(), Failure> {
    #[inline]
    fn from(outcome: Outcome) -> Self {
        outcome.into_result()
    }
}

impl<T> From<Result<T, Failure>> for TypedOutcome<T> {
    #[inline]
    fn from(result: Result<T, Failure>) -> Self {
        Self { repr: result }
    }
}

impl<T> From<TypedOutcome<T>> for Result<T, Failure> {
    #[inline]
    fn from(outcome: TypedOutcome<T>) -> Self {
        outcome.into_result()
    }
}

#[cfg(feature = "std")]
mod catch {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use crate::errors::ExceptionError;
    use crate::types::{Outcome, TypedOutcome};

    impl Outcome {
        /// Runs `f`, turning a panic into an [`ExceptionError`] failure.
        ///
        /// The panic hook still runs, so the panic message is printed as usual.
        pub fn catch<F: FnOnce()>(f: F) -> Self {
            match catch_unwind(AssertUnwindSafe(f)) {
                Ok(()) => Self::success(),
                Err(payload) => Self::from_error(ExceptionError::from_panic(payload)),
            }
        }
    }

    impl<T> TypedOutcome<T> {
        /// Runs `f`, wrapping its value or turning a panic into an
        /// [`ExceptionError`] failure.
        pub fn catch<F: FnOnce() -> T>(f: F) -> Self {
            match catch_unwind(AssertUnwindSafe(f)) {
                Ok(value) => Self::success(value),
                Err(payload) => Self::from_error(ExceptionError::from_panic(payload)),
            }
        }
    }
}
