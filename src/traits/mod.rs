//! Core traits for building and composing outcomes.
//!
//! - [`ErrorCapability`]: the "has a message" contract every error kind meets
//! - [`IntoErrorRef`]: conversion into the shared error handle stored by failures
//! - [`ResultExt`]: bridges standard `Result` values into [`TypedOutcome`](crate::TypedOutcome)
//!
//! # Examples
//!
//! ```
//! use causal_rail::traits::{ErrorCapability, ResultExt};
//!
//! let outcome = "42".parse::<u8>().into_outcome();
//! assert_eq!(outcome.value(), Some(&42));
//!
//! let message: &'static str = "plain strings are errors too";
//! assert_eq!(message.kind(), "message");
//! ```

pub mod error_capability;
pub mod into_error_ref;
pub mod result_ext;

pub use error_capability::{AsAny, ErrorCapability, ErrorRef};
pub use into_error_ref::IntoErrorRef;
pub use result_ext::ResultExt;
