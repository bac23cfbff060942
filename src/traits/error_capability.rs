//! The minimal contract every error kind satisfies to travel inside an outcome.
//!
//! An error kind only has to render a human-readable message. Anything richer
//! (codes, fields, sources) stays on the concrete type and can be recovered
//! through `downcast_ref` on `dyn ErrorCapability`.
//!
//! # Examples
//!
//! ```
//! use causal_rail::traits::ErrorCapability;
//! use causal_rail::Outcome;
//! use std::borrow::Cow;
//!
//! #[derive(Debug)]
//! struct QuotaExceeded {
//!     limit: u32,
//! }
//!
//! impl ErrorCapability for QuotaExceeded {
//!     fn message(&self) -> Cow<'_, str> {
//!         Cow::Owned(format!("quota of {} requests exceeded", self.limit))
//!     }
//! }
//!
//! let outcome = Outcome::from_error(QuotaExceeded { limit: 10 });
//! let error = outcome.error().unwrap();
//! assert_eq!(error.message(), "quota of 10 requests exceeded");
//! assert_eq!(error.downcast_ref::<QuotaExceeded>().map(|e| e.limit), Some(10));
//! ```

use core::any::Any;
use core::fmt::Debug;

use crate::types::alloc_type::{Arc, Cow, String};

/// Shared handle to an error object.
///
/// Lifting a failure into another outcome records the same handle twice (on
/// the new failure and on its cause), so identity can be checked with
/// `Arc::ptr_eq`.
pub type ErrorRef = Arc<dyn ErrorCapability>;

/// Upcast helper so `dyn ErrorCapability` can be downcast to its concrete kind.
///
/// Implemented for every `'static` type; there is no reason to implement it by hand.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Anything that can explain a failure with a message.
pub trait ErrorCapability: AsAny + Debug + Send + Sync {
    /// Human-readable description. Should not be empty.
    fn message(&self) -> Cow<'_, str>;

    /// Short name of the error kind, used in reports and logs.
    ///
    /// Defaults to the last path segment of the implementing type's name.
    fn kind(&self) -> &'static str {
        short_type_name(core::any::type_name::<Self>())
    }
}

impl dyn ErrorCapability {
    /// Returns `true` if the error object is of concrete type `E`.
    #[inline]
    pub fn is<E: ErrorCapability>(&self) -> bool {
        self.as_any().is::<E>()
    }

    /// Returns the error object as `E` if that is its concrete type.
    #[inline]
    pub fn downcast_ref<E: ErrorCapability>(&self) -> Option<&E> {
        self.as_any().downcast_ref::<E>()
    }
}

impl ErrorCapability for &'static str {
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(non_empty(self))
    }

    fn kind(&self) -> &'static str {
        "message"
    }
}

impl ErrorCapability for String {
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(non_empty(self))
    }

    fn kind(&self) -> &'static str {
        "message"
    }
}

/// Stand-in for message errors built from an empty string.
pub(crate) const EMPTY_MESSAGE: &str = "unspecified error";

/// Returns `message`, or [`EMPTY_MESSAGE`] when it is empty.
#[inline]
pub(crate) fn non_empty(message: &str) -> &str {
    if message.is_empty() {
        EMPTY_MESSAGE
    } else {
        message
    }
}

/// Strips module paths from a type name, keeping generic arguments intact.
pub(crate) fn short_type_name(full: &'static str) -> &'static str {
    let head = match full.find('<') {
        Some(idx) => &full[..idx],
        None => full,
    };
    match head.rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}
