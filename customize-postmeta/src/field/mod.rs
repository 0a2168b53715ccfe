//! Generic postmeta field surface
//!
//! A postmeta field binds a metadata key on a content item to a live-editable
//! setting in the preview UI. The host owns persistence and change
//! propagation; a [`PostmetaFieldController`] only describes the field and
//! supplies its enqueue/sanitize/validate behaviors.

pub mod registry;

pub use registry::FieldRegistry;

use crate::error::CustomizeResult;
use crate::host::{PostId, ScriptRegistry};
use serde::Serialize;

/// How a setting change reaches the preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    /// Full preview refresh on change (default)
    #[default]
    Refresh,
    /// In-place update via a message to the preview frame
    PostMessage,
}

impl Transport {
    /// Wire name understood by the preview runtime
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Refresh => "refresh",
            Self::PostMessage => "postMessage",
        }
    }
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One selectable choice offered to the preview UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateChoice {
    /// Machine value (template file identifier, or the `default` sentinel)
    pub value: String,
    /// Human-readable display text
    pub text: String,
}

impl TemplateChoice {
    /// Create a choice
    #[must_use]
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

/// Setting instance context handed to [`PostmetaFieldController::sanitize_setting`]
///
/// Identifies the specific post whose metadata the candidate value targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostmetaSetting {
    /// Post whose metadata is being edited
    pub post_id: PostId,
}

impl PostmetaSetting {
    /// Create a setting context for a post
    #[must_use]
    pub const fn new(post_id: PostId) -> Self {
        Self { post_id }
    }
}

/// A settable field backed by post metadata
///
/// Implementations describe one metadata key and the behaviors the host
/// invokes at its lifecycle points: the asset-enqueue phase and the
/// value-sanitize phase during a setting write.
///
/// `sanitize_value` and `sanitize_setting` are independent operations; the
/// host decides whether and in what order to call them. Neither invokes the
/// other.
pub trait PostmetaFieldController: Send + Sync {
    /// Metadata key this field is stored under
    fn meta_key(&self) -> &str;

    /// Post-type feature a post type must support for the field to be active
    fn post_type_support(&self) -> &str;

    /// Preview transport for changes to this field
    fn transport(&self) -> Transport;

    /// Value used when the post has no stored metadata
    fn default_value(&self) -> &str;

    /// Load the field's client-side assets into the preview page
    ///
    /// Invoked at most once per preview session by the host; repeated calls
    /// with unchanged host state must produce identical registrations.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CustomizeError::Export`] if export data cannot be
    /// serialized.
    fn enqueue_scripts(&self, scripts: &mut dyn ScriptRegistry) -> CustomizeResult<()>;

    /// Lexical cleanup of a raw submitted value, with no semantic validation
    fn sanitize_value(&self, raw: &str) -> String;

    /// Validate a candidate value in the context of a specific post
    ///
    /// Returns `Ok(Some(value))` when accepted (echoed unchanged) and
    /// `Ok(None)` when rejected softly. With `strict`, rejection is a hard
    /// failure instead.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CustomizeError::InvalidPageTemplate`] when `strict`
    /// is set and the candidate is invalid for the post.
    fn sanitize_setting(
        &self,
        value: &str,
        setting: &PostmetaSetting,
        strict: bool,
    ) -> CustomizeResult<Option<String>>;
}
