//! Outcome types and their supporting structures.
//!
//! - [`Outcome`]: success without a payload, or a failure
//! - [`TypedOutcome`]: success with a payload, or a failure
//! - [`Failure`]: an error plus an optional owned cause
//! - [`ChainReport`]: owned snapshot of a causal chain
//!
//! # Examples
//!
//! ```
//! use causal_rail::{Outcome, TypedOutcome};
//!
//! let lookup: TypedOutcome<u32> = TypedOutcome::from_error("row missing");
//! let saved = Outcome::wrap("saving order", lookup);
//!
//! println!("{}", saved);
//! // Output: saving order -> row missing
//! assert_eq!(saved.chain().count(), 2);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod error_formatter;
pub mod failure;
pub mod outcome;
pub mod report;
pub mod typed_outcome;

pub use error_formatter::{ChainFormatBuilder, ErrorFormatConfig, ErrorFormatter};
pub use failure::{Chain, Failure, NotAFailure};
pub use outcome::Outcome;
pub use report::{ChainReport, ReportEntry};
pub use typed_outcome::TypedOutcome;

/// SmallVec-backed collection used for chain snapshots.
///
/// Uses inline storage for up to 4 elements; most chains are only a few
/// layers deep.
pub type ErrorVec<E> = SmallVec<[E; 4]>;
