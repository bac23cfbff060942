//! Ready-made error kinds.
//!
//! Outcomes accept any [`ErrorCapability`]; these cover the common cases so
//! callers do not have to define a type for every failure:
//!
//! - [`MessageError`]: a plain message
//! - [`NotFoundError`]: a missing resource, optionally with the key looked up
//! - [`InvalidOperationError`]: an operation refused in the current state
//! - [`ExceptionError`]: adapts a native error (or a caught panic)
//!
//! # Examples
//!
//! ```
//! use causal_rail::errors::{InvalidOperationError, NotFoundError};
//! use causal_rail::prelude::*;
//!
//! let missing = Outcome::from_error(NotFoundError::new("user").with_key("42"));
//! let refused = Outcome::wrap(InvalidOperationError::new("delete", "user is locked"), missing);
//!
//! assert_eq!(
//!     refused.to_string(),
//!     "cannot delete: user is locked -> user `42` not found"
//! );
//! ```

use core::fmt::{self, Display};

use crate::traits::error_capability::non_empty;
use crate::traits::ErrorCapability;
use crate::types::alloc_type::{Cow, String};

mod exception;

pub use exception::ExceptionError;

/// Generic message-carrying error.
///
/// An empty message is reported as `"unspecified error"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageError {
    message: Cow<'static, str>,
}

impl MessageError {
    #[inline]
    pub fn new<M: Into<Cow<'static, str>>>(message: M) -> Self {
        Self { message: message.into() }
    }
}

impl Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(non_empty(&self.message))
    }
}

impl core::error::Error for MessageError {}

impl ErrorCapability for MessageError {
    #[inline]
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(non_empty(&self.message))
    }

    fn kind(&self) -> &'static str {
        "message"
    }
}

/// A lookup that found nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotFoundError {
    resource: Cow<'static, str>,
    key: Option<String>,
}

impl NotFoundError {
    /// `resource` names what was looked up, e.g. `"user"` or `"config file"`.
    #[inline]
    pub fn new<R: Into<Cow<'static, str>>>(resource: R) -> Self {
        Self { resource: resource.into(), key: None }
    }

    /// Records the key that was looked up.
    #[inline]
    pub fn with_key<K: Into<String>>(mut self, key: K) -> Self {
        self.key = Some(key.into());
        self
    }

    #[inline]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    #[inline]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

impl Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(f, "{} `{}` not found", self.resource, key),
            None => write!(f, "{} not found", self.resource),
        }
    }
}

impl core::error::Error for NotFoundError {}

impl ErrorCapability for NotFoundError {
    fn message(&self) -> Cow<'_, str> {
        Cow::Owned(alloc::format!("{}", self))
    }

    fn kind(&self) -> &'static str {
        "not_found"
    }
}

/// An operation that is not allowed in the current state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvalidOperationError {
    operation: Cow<'static, str>,
    reason: Cow<'static, str>,
}

impl InvalidOperationError {
    #[inline]
    pub fn new<O, R>(operation: O, reason: R) -> Self
    where
        O: Into<Cow<'static, str>>,
        R: Into<Cow<'static, str>>,
    {
        Self { operation: operation.into(), reason: reason.into() }
    }

    #[inline]
    pub fn operation(&self) -> &str {
        &self.operation
    }

    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl Display for InvalidOperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot {}: {}", self.operation, self.reason)
    }
}

impl core::error::Error for InvalidOperationError {}

impl ErrorCapability for InvalidOperationError {
    fn message(&self) -> Cow<'_, str> {
        Cow::Owned(alloc::format!("{}", self))
    }

    fn kind(&self) -> &'static str {
        "invalid_operation"
    }
}
