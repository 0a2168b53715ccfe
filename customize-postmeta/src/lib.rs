//! customize-postmeta: live-preview postmeta field controllers for CMS
//! customizer UIs
//!
//! A customizer lets an editor change a page inside a live preview. Some of
//! what they edit is post metadata — this crate models those fields. A
//! [`field::PostmetaFieldController`] binds one metadata key to a
//! live-editable setting: it describes the field (meta key, post-type
//! support requirement, preview transport, default value) and supplies the
//! behaviors the host invokes at its lifecycle points (asset enqueue, raw
//! input cleanup, candidate validation). The host framework owns
//! persistence, change propagation, and the preview transport itself.
//!
//! The one concrete controller shipped here is
//! [`page_template::PageTemplateController`], which manages a page's theme
//! template assignment.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use customize_postmeta::prelude::*;
//!
//! # fn main() -> customize_postmeta::CustomizeResult<()> {
//! let theme = StaticTheme::new([("templates/full-width.html", "Full Width")]);
//! let controller = PageTemplateController::new(
//!     Arc::new(theme),
//!     Arc::new(InMemoryPosts::new()),
//!     Arc::new(PassthroughLocalizer::new()),
//! );
//!
//! // Registration phase: the host wires every field controller once.
//! let mut registry = FieldRegistry::new();
//! registry.register(Arc::new(controller))?;
//!
//! // Asset-enqueue phase: load control scripts into the preview page.
//! let mut scripts = CollectedScripts::new();
//! registry.enqueue_all(&mut scripts)?;
//!
//! // Value-sanitize phase: validate a submitted value for a post.
//! let setting = PostmetaSetting::new(PostId(1));
//! let controller = registry.get("_page_template").unwrap();
//! let accepted = controller.sanitize_setting("default", &setting, false)?;
//! assert_eq!(accepted.as_deref(), Some("default"));
//! # Ok(())
//! # }
//! ```
//!
//! # Design
//!
//! Host infrastructure is consumed through the narrow traits in [`host`]:
//! theme template enumeration, post lookup, script registration, and
//! localized-string lookup. In-memory implementations of each are provided
//! for tests and hand-assembled hosts.

pub mod error;
pub mod field;
pub mod host;
pub mod page_template;

pub use error::{CustomizeError, CustomizeResult};

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! # Examples
    //!
    //! ```rust
    //! use customize_postmeta::prelude::*;
    //! ```

    // Field surface
    pub use crate::field::{
        FieldRegistry, PostmetaFieldController, PostmetaSetting, TemplateChoice, Transport,
    };

    // Concrete controllers
    pub use crate::page_template::PageTemplateController;

    // Host collaborator seams
    pub use crate::host::{
        CollectedScripts, InMemoryPosts, Localizer, PassthroughLocalizer, Post, PostId,
        PostStore, ScriptRegistry, StaticTheme, TableLocalizer, ThemeProvider,
    };

    // Error types
    pub use crate::error::{CustomizeError, CustomizeResult};
}
