//! Causal chain formatting utilities.

use crate::types::alloc_type::{self, Cow, String, Vec};
use crate::types::Failure;
use core::fmt::Display;

use alloc::string::ToString;

/// Trait for customizing how a chain of failure messages is rendered.
///
/// Messages arrive outermost failure first, root cause last.
pub trait ErrorFormatter {
    fn format_item(&self, item: &str) -> String {
        item.to_string()
    }

    fn separator(&self) -> &str {
        " -> "
    }

    /// If true, chain renderers prefix each message with its error kind,
    /// e.g. `[not_found]`, before calling [`format_chain`](ErrorFormatter::format_chain).
    fn show_kind(&self) -> bool {
        false
    }

    fn format_chain(&self, messages: &[Cow<'_, str>]) -> String {
        messages
            .iter()
            .map(|message| self.format_item(message))
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}

/// Configuration-based chain formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    pub separator: alloc_type::String,
    pub context_prefix: Option<alloc_type::String>,
    pub context_suffix: Option<alloc_type::String>,
    pub root_prefix: Option<alloc_type::String>,
    pub root_suffix: Option<alloc_type::String>,
    pub multiline: bool,
    pub indent: alloc_type::String,
    pub show_kind: bool,
    pub cascade: bool,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            separator: " -> ".into(),
            context_prefix: None,
            context_suffix: None,
            root_prefix: None,
            root_suffix: None,
            multiline: false,
            indent: "  ".into(),
            show_kind: false,
            cascade: false,
        }
    }
}

impl ErrorFormatConfig {
    #[inline]
    pub fn pretty() -> Self {
        Self {
            separator: "\n".into(),
            context_prefix: Some("├─ ".into()),
            root_prefix: Some("└─ ".into()),
            multiline: true,
            cascade: true,
            ..Default::default()
        }
    }

    #[inline]
    pub fn cascaded() -> Self {
        Self { separator: "\n".into(), multiline: true, cascade: true, ..Default::default() }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), ..Default::default() }
    }

    #[inline]
    pub fn with_kinds() -> Self {
        Self { show_kind: true, ..Default::default() }
    }
}

impl ErrorFormatter for ErrorFormatConfig {
    fn format_item(&self, item: &str) -> String {
        let mut result = String::new();
        if let Some(prefix) = &self.context_prefix {
            result.push_str(prefix);
        }
        result.push_str(item);
        if let Some(suffix) = &self.context_suffix {
            result.push_str(suffix);
        }
        result
    }

    fn separator(&self) -> &str {
        &self.separator
    }

    fn show_kind(&self) -> bool {
        self.show_kind
    }

    fn format_chain(&self, messages: &[Cow<'_, str>]) -> String {
        if messages.is_empty() {
            return String::new();
        }

        let item_count = messages.len();
        let mut result = String::with_capacity(item_count * 32);

        if self.multiline && self.context_prefix.is_some() {
            result.push_str("┌ ");
            result.push_str(&messages[0]);

            for message in messages.iter().take(item_count.saturating_sub(1)).skip(1) {
                result.push_str(&self.separator);
                if let Some(prefix) = &self.context_prefix {
                    result.push_str(prefix);
                }
                result.push_str(message);
            }

            if item_count > 1 {
                result.push_str(&self.separator);
                let prefix = self.root_prefix.as_ref().or(self.context_prefix.as_ref());
                if let Some(p) = prefix {
                    result.push_str(p);
                }
                result.push_str(&messages[item_count - 1]);
            }
        } else if self.cascade {
            for (i, message) in messages.iter().enumerate() {
                if i > 0 {
                    result.push_str(&self.separator);
                    for _ in 0..i {
                        result.push_str(&self.indent);
                    }
                }
                result.push_str(message);
            }
        } else {
            let last_idx = item_count - 1;
            for (i, message) in messages.iter().enumerate() {
                if i > 0 {
                    result.push_str(&self.separator);
                }

                let is_last = i == last_idx;
                let prefix = if is_last {
                    self.root_prefix.as_ref().or(self.context_prefix.as_ref())
                } else {
                    self.context_prefix.as_ref()
                };
                if let Some(p) = prefix {
                    result.push_str(p);
                }

                result.push_str(message);

                let suffix = if is_last {
                    self.root_suffix.as_ref().or(self.context_suffix.as_ref())
                } else {
                    self.context_suffix.as_ref()
                };
                if let Some(s) = suffix {
                    result.push_str(s);
                }
            }
        }
        result
    }
}

/// Builder for customizing how a [`Failure`] chain is displayed.
///
/// Obtained from [`Failure::fmt`].
///
/// ```
/// use causal_rail::Outcome;
///
/// let root = Outcome::from_error("socket closed");
/// let outer = Outcome::wrap("syncing inbox", root);
/// let failure = outer.failure().unwrap();
///
/// assert_eq!(failure.fmt().to_string(), "syncing inbox -> socket closed");
/// assert_eq!(failure.fmt().root_first(true).to_string(), "socket closed -> syncing inbox");
/// assert_eq!(failure.fmt().cascaded().to_string(), "syncing inbox\n  socket closed");
/// assert_eq!(
///     failure.fmt().show_kind(true).to_string(),
///     "[message] syncing inbox -> [message] socket closed"
/// );
/// ```
pub struct ChainFormatBuilder<'a> {
    pub(crate) failure: &'a Failure,
    pub(crate) config: ErrorFormatConfig,
    pub(crate) root_first: bool,
}

impl<'a> ChainFormatBuilder<'a> {
    pub fn new(failure: &'a Failure) -> Self {
        Self { failure, config: ErrorFormatConfig::default(), root_first: false }
    }

    pub fn with_separator(mut self, separator: impl Into<alloc_type::String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    /// If true, renders the root cause first and the outermost failure last.
    pub fn root_first(mut self, root_first: bool) -> Self {
        self.root_first = root_first;
        self
    }

    /// Prefixes every message with its error kind, e.g. `[not_found]`.
    pub fn show_kind(mut self, show: bool) -> Self {
        self.config.show_kind = show;
        self
    }

    /// Switches to the pretty preset. `show_kind` is kept.
    pub fn pretty(mut self) -> Self {
        self.config =
            ErrorFormatConfig { show_kind: self.config.show_kind, ..ErrorFormatConfig::pretty() };
        self
    }

    /// Switches to the compact preset. `show_kind` is kept.
    pub fn compact(mut self) -> Self {
        self.config =
            ErrorFormatConfig { show_kind: self.config.show_kind, ..ErrorFormatConfig::compact() };
        self
    }

    pub fn cascade(mut self, enabled: bool) -> Self {
        self.config.cascade = enabled;
        if enabled {
            self.config.multiline = true;
            if self.config.separator == " -> " {
                self.config.separator = "\n".into();
            }
        }
        self
    }

    /// Switches to the cascaded preset. `show_kind` is kept.
    pub fn cascaded(mut self) -> Self {
        self.config =
            ErrorFormatConfig { show_kind: self.config.show_kind, ..ErrorFormatConfig::cascaded() };
        self
    }
}

impl Display for ChainFormatBuilder<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut messages: Vec<Cow<'_, str>> = self
            .failure
            .chain()
            .map(|link| labeled(link.kind(), link.message(), self.config.show_kind))
            .collect();

        if self.root_first {
            messages.reverse();
        }

        f.write_str(&self.config.format_chain(&messages))
    }
}

/// Prefixes `message` with `[kind] ` when `show_kind` is set.
pub(crate) fn labeled<'a>(kind: &str, message: Cow<'a, str>, show_kind: bool) -> Cow<'a, str> {
    if !show_kind {
        return message;
    }
    Cow::Owned(alloc::format!("[{}] {}", kind, message))
}
