//! Theme template enumeration
//!
//! The active theme declares which page templates exist. Controllers consult
//! it twice: globally (to build the choice list shown in the preview UI) and
//! scoped to a post (to validate a submitted value, since a theme may limit
//! templates to certain post types).

use super::Post;
use std::collections::HashMap;

/// Access to the active theme's declared page templates
#[cfg_attr(test, mockall::automock)]
pub trait ThemeProvider: Send + Sync {
    /// Ordered `(template file, display name)` pairs, as declared by the
    /// theme.
    ///
    /// With `post` given, the set is scoped to that post; without, the
    /// theme's global template set is returned.
    fn page_templates<'a>(&self, post: Option<&'a Post>) -> Vec<(String, String)>;
}

/// Declaration-ordered template list with optional per-post-type overrides
///
/// # Examples
///
/// ```rust
/// use customize_postmeta::host::{StaticTheme, ThemeProvider};
///
/// let theme = StaticTheme::new([
///     ("templates/full-width.html", "Full Width"),
///     ("templates/sidebar.html", "Sidebar"),
/// ]);
///
/// let templates = theme.page_templates(None);
/// assert_eq!(templates[0].1, "Full Width");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticTheme {
    templates: Vec<(String, String)>,
    by_post_type: HashMap<String, Vec<(String, String)>>,
}

impl StaticTheme {
    /// Create a theme from `(file, name)` pairs in declaration order
    #[must_use]
    pub fn new<I, F, N>(templates: I) -> Self
    where
        I: IntoIterator<Item = (F, N)>,
        F: Into<String>,
        N: Into<String>,
    {
        Self {
            templates: templates
                .into_iter()
                .map(|(file, name)| (file.into(), name.into()))
                .collect(),
            by_post_type: HashMap::new(),
        }
    }

    /// Restrict the template set seen by posts of `post_type`
    #[must_use]
    pub fn with_post_type_templates<I, F, N>(mut self, post_type: impl Into<String>, templates: I) -> Self
    where
        I: IntoIterator<Item = (F, N)>,
        F: Into<String>,
        N: Into<String>,
    {
        self.by_post_type.insert(
            post_type.into(),
            templates
                .into_iter()
                .map(|(file, name)| (file.into(), name.into()))
                .collect(),
        );
        self
    }
}

impl ThemeProvider for StaticTheme {
    fn page_templates(&self, post: Option<&Post>) -> Vec<(String, String)> {
        post.and_then(|p| self.by_post_type.get(&p.post_type))
            .unwrap_or(&self.templates)
            .clone()
    }
}
