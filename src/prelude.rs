//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use causal_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fail!`], [`ensure!`]
//! - **Types**: [`Outcome`], [`TypedOutcome`], [`Failure`], [`ErrorRef`]
//! - **Traits**: [`ErrorCapability`], [`IntoErrorRef`], [`ResultExt`]
//!
//! # Examples
//!
//! ```
//! use causal_rail::prelude::*;
//!
//! fn read_limit(raw: &str) -> TypedOutcome<u32> {
//!     raw.trim().parse::<u32>().ctx("reading limit")
//! }
//!
//! let limit = read_limit(" 12 ");
//! assert_eq!(limit.value(), Some(&12));
//!
//! let bad = read_limit("twelve");
//! assert_eq!(bad.error().unwrap().message(), "reading limit");
//! ```

// Macros
pub use crate::{ensure, fail};

// Core types
pub use crate::types::{Failure, Outcome, TypedOutcome};

// Traits
pub use crate::traits::{ErrorCapability, ErrorRef, IntoErrorRef, ResultExt};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::OutcomeTraceExt;
