//! Tracing integration.
//!
//! Outcomes never log on their own. These helpers let calling code emit a
//! structured event for a failure, or record the active span as an extra
//! layer of context, while passing the value through.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! causal-rail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::errors::MessageError;
use crate::types::{Failure, Outcome, TypedOutcome};

/// Extension trait adding tracing hooks to outcomes.
///
/// # Example
///
/// ```rust,ignore
/// use causal_rail::prelude::*;
/// use tracing::info_span;
///
/// fn sync_inbox(user: u64) -> Outcome {
///     let _guard = info_span!("sync_inbox", user).entered();
///     fetch_messages(user)
///         .with_current_span()
///         .trace_failure()
/// }
/// ```
pub trait OutcomeTraceExt: Sized {
    /// Emits an `ERROR` event describing the failure, if any.
    ///
    /// The event carries the outermost error's `kind`, the chain `depth` and
    /// the rendered `chain`.
    fn trace_failure(self) -> Self;

    /// Same as [`trace_failure`](OutcomeTraceExt::trace_failure) at `DEBUG`
    /// level, for failures that are expected and handled.
    fn trace_failure_debug(self) -> Self;

    /// On failure, adds a layer naming the current span.
    fn with_current_span(self) -> Self {
        self.with_span(&Span::current())
    }

    /// On failure, adds a layer naming `span`.
    fn with_span(self, span: &Span) -> Self;
}

impl OutcomeTraceExt for Outcome {
    fn trace_failure(self) -> Self {
        if let Some(failure) = self.failure() {
            emit_error(failure);
        }
        self
    }

    fn trace_failure_debug(self) -> Self {
        if let Some(failure) = self.failure() {
            emit_debug(failure);
        }
        self
    }

    fn with_span(self, span: &Span) -> Self {
        if self.is_success() {
            return self;
        }
        self.with_context(span_to_error(span))
    }
}

impl<T> OutcomeTraceExt for TypedOutcome<T> {
    fn trace_failure(self) -> Self {
        if let Some(failure) = self.failure() {
            emit_error(failure);
        }
        self
    }

    fn trace_failure_debug(self) -> Self {
        if let Some(failure) = self.failure() {
            emit_debug(failure);
        }
        self
    }

    fn with_span(self, span: &Span) -> Self {
        if self.is_success() {
            return self;
        }
        self.with_context(span_to_error(span))
    }
}

fn emit_error(failure: &Failure) {
    tracing::error!(
        kind = failure.kind(),
        depth = failure.depth(),
        chain = %failure,
        "operation failed"
    );
}

fn emit_debug(failure: &Failure) {
    tracing::debug!(
        kind = failure.kind(),
        depth = failure.depth(),
        chain = %failure,
        "operation failed"
    );
}

/// Names a span as an error layer.
///
/// A disabled span has no metadata and is reported as `unknown`.
fn span_to_error(span: &Span) -> MessageError {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    MessageError::new(alloc::format!("in span '{}'", name))
}
