use core::fmt::{self, Display};

use crate::traits::error_capability::short_type_name;
use crate::traits::ErrorCapability;
use crate::types::alloc_type::{Box, Cow, String};

type BoxedError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Adapts a native error into an [`ErrorCapability`] without re-raising it.
///
/// The adapter records the source's type name and rendered message, and keeps
/// the original error so it can still be inspected or downcast.
///
/// # Examples
///
/// ```
/// use causal_rail::errors::ExceptionError;
/// use causal_rail::prelude::*;
/// use std::num::ParseIntError;
///
/// let parse_error = "abc".parse::<u32>().unwrap_err();
/// let outcome = Outcome::from_exception(parse_error);
///
/// let adapted = outcome.error().unwrap().downcast_ref::<ExceptionError>().unwrap();
/// assert_eq!(adapted.type_name(), "ParseIntError");
/// assert!(adapted.downcast_original::<ParseIntError>().is_some());
/// ```
#[derive(Debug)]
pub struct ExceptionError {
    type_name: &'static str,
    message: String,
    original: Option<BoxedError>,
}

impl ExceptionError {
    /// Adapts `error`, keeping it as the original.
    pub fn new<E>(error: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        let type_name = short_type_name(core::any::type_name::<E>());
        let message = render(&error, type_name);
        Self { type_name, message, original: Some(Box::new(error)) }
    }

    /// Adapts an already type-erased error.
    ///
    /// The concrete type is no longer known, so the type name is recorded as
    /// `"dyn Error"`. Use [`from_boxed_named`](ExceptionError::from_boxed_named)
    /// when the caller knows it.
    pub fn from_boxed(error: BoxedError) -> Self {
        Self::from_boxed_named(error, "dyn Error")
    }

    /// Adapts a type-erased error under a caller-supplied type name.
    pub fn from_boxed_named(error: BoxedError, type_name: &'static str) -> Self {
        let message = render(&*error, type_name);
        Self { type_name, message, original: Some(error) }
    }

    /// Adapts the payload of a caught panic.
    ///
    /// Panic payloads are not `Sync`, so only the message is kept. `&str` and
    /// `String` payloads (what `panic!` produces) become the message.
    #[cfg(feature = "std")]
    pub fn from_panic(payload: Box<dyn core::any::Any + Send + 'static>) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&'static str>() {
            String::from(*text)
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            String::from("panic with a non-string payload")
        };
        Self { type_name: "panic", message, original: None }
    }

    /// Short type name of the adapted error (`"panic"` for caught panics).
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The adapted error, unless it came from a panic.
    #[inline]
    pub fn original(&self) -> Option<&(dyn core::error::Error + Send + Sync + 'static)> {
        self.original.as_deref()
    }

    /// The adapted error as its concrete type.
    #[inline]
    pub fn downcast_original<E>(&self) -> Option<&E>
    where
        E: core::error::Error + 'static,
    {
        self.original()?.downcast_ref::<E>()
    }
}

fn render(error: &(dyn core::error::Error + Send + Sync + 'static), type_name: &str) -> String {
    use alloc::string::ToString;

    let message = error.to_string();
    if message.is_empty() {
        return type_name.to_string();
    }
    message
}

impl Display for ExceptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.type_name, self.message)
    }
}

impl core::error::Error for ExceptionError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.original.as_deref().map(|e| e as &(dyn core::error::Error + 'static))
    }
}

impl ErrorCapability for ExceptionError {
    #[inline]
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.message)
    }

    fn kind(&self) -> &'static str {
        "exception"
    }
}
