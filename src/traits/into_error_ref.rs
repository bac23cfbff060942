//! Trait for turning an error value into the shared [`ErrorRef`] handle.
//!
//! Every factory and combinator that takes an error accepts `impl IntoErrorRef`,
//! so callers can pass either a fresh error value or a handle they already hold.
//!
//! # Implementations
//!
//! - any `E: ErrorCapability` - moved into a new `Arc`
//! - `ErrorRef` - identity conversion, the handle keeps its identity
//!
//! # Examples
//!
//! ```
//! use causal_rail::traits::{ErrorRef, IntoErrorRef};
//! use causal_rail::Outcome;
//! use std::sync::Arc;
//!
//! let shared: ErrorRef = "disk full".into_error_ref();
//! let first = Outcome::from_error(shared.clone());
//! let second = Outcome::from_error(shared.clone());
//!
//! assert!(Arc::ptr_eq(first.error().unwrap(), second.error().unwrap()));
//! ```
use crate::traits::{ErrorCapability, ErrorRef};
use crate::types::alloc_type::Arc;

/// Converts a value into an [`ErrorRef`] for storage in a failure.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an outcome error",
    label = "this type does not implement `ErrorCapability`",
    note = "implement `ErrorCapability` for `{Self}` or wrap it in `MessageError` / `ExceptionError`"
)]
pub trait IntoErrorRef {
    fn into_error_ref(self) -> ErrorRef;
}

impl<E: ErrorCapability> IntoErrorRef for E {
    #[inline]
    fn into_error_ref(self) -> ErrorRef {
        Arc::new(self)
    }
}

impl IntoErrorRef for ErrorRef {
    /// Identity conversion; the handle is not re-allocated.
    #[inline]
    fn into_error_ref(self) -> ErrorRef {
        self
    }
}
