//! Owned snapshot of a causal chain.
//!
//! A [`ChainReport`] copies the kind and message of every link so it can
//! outlive the failure, cross thread or process boundaries, or (with the
//! `serde` feature) be serialized into structured logs.
//!
//! # Examples
//!
//! ```
//! use causal_rail::errors::NotFoundError;
//! use causal_rail::Outcome;
//!
//! let root = Outcome::from_error(NotFoundError::new("invoice").with_key("INV-7"));
//! let outer = Outcome::wrap("rendering statement", root);
//!
//! let report = outer.failure().unwrap().report();
//! assert_eq!(report.len(), 2);
//! assert_eq!(report.root().unwrap().kind, "not_found");
//! assert_eq!(report.to_string(), "rendering statement -> invoice `INV-7` not found");
//! ```

use core::fmt::{self, Display};

use crate::types::alloc_type::{Cow, String, Vec};
use crate::types::error_formatter::{labeled, ErrorFormatConfig, ErrorFormatter};
use crate::types::{ErrorVec, Failure};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use alloc::string::ToString;

/// One link of a [`ChainReport`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReportEntry {
    pub kind: String,
    pub message: String,
}

/// Kind and message of every failure in a chain, outermost first.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChainReport {
    entries: ErrorVec<ReportEntry>,
}

impl ChainReport {
    pub fn from_failure(failure: &Failure) -> Self {
        let entries = failure
            .chain()
            .map(|link| ReportEntry {
                kind: link.kind().to_string(),
                message: link.message().into_owned(),
            })
            .collect();
        Self { entries }
    }

    #[inline]
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, ReportEntry> {
        self.entries.iter()
    }

    /// The outermost failure.
    #[inline]
    pub fn head(&self) -> Option<&ReportEntry> {
        self.entries.first()
    }

    /// The root cause.
    #[inline]
    pub fn root(&self) -> Option<&ReportEntry> {
        self.entries.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the messages with a custom formatter.
    pub fn format_with<F: ErrorFormatter>(&self, formatter: F) -> String {
        let show_kind = formatter.show_kind();
        let messages: Vec<Cow<'_, str>> = self
            .entries
            .iter()
            .map(|entry| labeled(&entry.kind, Cow::Borrowed(entry.message.as_str()), show_kind))
            .collect();
        formatter.format_chain(&messages)
    }
}

impl Display for ChainReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(ErrorFormatConfig::default()))
    }
}

impl<'a> IntoIterator for &'a ChainReport {
    type Item = &'a ReportEntry;
    type IntoIter = core::slice::Iter<'a, ReportEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
