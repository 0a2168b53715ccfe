//! Host collaborator seams
//!
//! Everything the customizer framework already provides — theme template
//! enumeration, post lookup, script registration, localization — is consumed
//! through the narrow traits in this module. Hosts implement them over their
//! own infrastructure; the in-memory implementations here are suitable for
//! tests, demos, and hosts that assemble preview pages by hand.

pub mod l10n;
pub mod scripts;
pub mod theme;

pub use l10n::{Localizer, PassthroughLocalizer, TableLocalizer};
pub use scripts::{CollectedScripts, ScriptRegistry};
pub use theme::{StaticTheme, ThemeProvider};

use std::collections::HashMap;
use std::fmt;

/// Identifier of a content item (post/page)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Minimal record for a content item
///
/// Carries only what field controllers need: the identifier and the post
/// type, which gates which fields are active and which theme templates apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Post identifier
    pub id: PostId,
    /// Post type slug (e.g. `page`)
    pub post_type: String,
}

impl Post {
    /// Create a post record
    #[must_use]
    pub fn new(id: PostId, post_type: impl Into<String>) -> Self {
        Self {
            id,
            post_type: post_type.into(),
        }
    }
}

/// Post lookup by identifier
#[cfg_attr(test, mockall::automock)]
pub trait PostStore: Send + Sync {
    /// Resolve a post, or `None` if the identifier is unknown
    fn post(&self, id: PostId) -> Option<Post>;
}

/// `HashMap`-backed post store
#[derive(Debug, Clone, Default)]
pub struct InMemoryPosts {
    posts: HashMap<PostId, Post>,
}

impl InMemoryPosts {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a post, replacing any existing entry with the same id
    pub fn insert(&mut self, post: Post) {
        self.posts.insert(post.id, post);
    }
}

impl PostStore for InMemoryPosts {
    fn post(&self, id: PostId) -> Option<Post> {
        self.posts.get(&id).cloned()
    }
}
