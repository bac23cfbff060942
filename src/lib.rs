//! Exception-free success/failure values with an owned causal chain.
//!
//! A failure is an ordinary value: an error object plus, optionally, the
//! earlier failure that caused it. Each layer that re-describes a failure
//! wraps it instead of discarding it, so the root cause is still there when
//! the failure is finally reported.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `causal_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Wrapping a failure with context
//!
//! ```
//! use causal_rail::errors::MessageError;
//! use causal_rail::prelude::*;
//! use std::sync::Arc;
//!
//! let r1 = Outcome::from_error(MessageError::new("boom"));
//! let root_error = r1.error().unwrap().clone();
//! let r2 = Outcome::wrap(MessageError::new("context"), r1);
//!
//! assert_eq!(r2.error().unwrap().message(), "context");
//! let inner = r2.inner().unwrap();
//! assert!(Arc::ptr_eq(inner.error().unwrap(), &root_error));
//! assert_eq!(r2.to_string(), "context -> boom");
//! ```
//!
//! ## Payload-carrying outcomes
//!
//! ```
//! use causal_rail::prelude::*;
//!
//! let doubled = TypedOutcome::success(21).map(|n| n * 2);
//! assert_eq!(doubled.value(), Some(&42));
//!
//! let failed: TypedOutcome<i32> = TypedOutcome::from_error("no input");
//! let label = failed.map_or_else(String::from("ok"), |error, _| error.message().into_owned());
//! assert_eq!(label, "no input");
//! ```
//!
//! ## Lifting a failure across payload types
//!
//! ```
//! use causal_rail::prelude::*;
//! use std::sync::Arc;
//!
//! let parsed: TypedOutcome<u16> = "port".parse::<u16>().into_outcome();
//! let error = parsed.error().unwrap().clone();
//!
//! let lifted = Outcome::lift(parsed);
//! assert!(Arc::ptr_eq(lifted.error().unwrap(), &error));
//! assert!(Arc::ptr_eq(lifted.inner().unwrap().error().unwrap(), &error));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between outcomes, failures and standard `Result`
pub mod convert;
/// Ready-made error kinds, including the native error adapter
pub mod errors;
/// Macros for building failures
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The error capability contract and conversion traits
pub mod traits;
/// Outcome, TypedOutcome, Failure and chain rendering
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
}

pub use errors::{ExceptionError, InvalidOperationError, MessageError, NotFoundError};
pub use traits::*;
pub use types::{
    Chain, ChainReport, ErrorFormatConfig, ErrorVec, Failure, NotAFailure, Outcome, ReportEntry,
    TypedOutcome,
};
