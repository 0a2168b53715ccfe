//! Localized-string lookup
//!
//! UI strings (the control label, the default-choice sentinel, rejection
//! messages) pass through a translation service owned by the host. The
//! source string doubles as the lookup key, gettext style.

use std::collections::HashMap;

/// Key-to-localized-string lookup
#[cfg_attr(test, mockall::automock)]
pub trait Localizer: Send + Sync {
    /// Translate a source string, returning it unchanged when no
    /// translation exists
    fn translate(&self, text: &str) -> String;
}

/// Localizer that returns every string unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughLocalizer;

impl PassthroughLocalizer {
    /// Create a passthrough localizer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Localizer for PassthroughLocalizer {
    fn translate(&self, text: &str) -> String {
        text.to_owned()
    }
}

/// Translation-table localizer with passthrough fallback
///
/// # Examples
///
/// ```rust
/// use customize_postmeta::host::{Localizer, TableLocalizer};
///
/// let l10n = TableLocalizer::new([("Page Template", "Seitenvorlage")]);
/// assert_eq!(l10n.translate("Page Template"), "Seitenvorlage");
/// assert_eq!(l10n.translate("(Default)"), "(Default)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableLocalizer {
    table: HashMap<String, String>,
}

impl TableLocalizer {
    /// Create a localizer from `(source, translation)` pairs
    #[must_use]
    pub fn new<I, S, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            table: entries
                .into_iter()
                .map(|(source, translation)| (source.into(), translation.into()))
                .collect(),
        }
    }
}

impl Localizer for TableLocalizer {
    fn translate(&self, text: &str) -> String {
        self.table
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_owned())
    }
}
