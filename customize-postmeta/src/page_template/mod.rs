//! Page template field controller
//!
//! Lets the live-preview UI edit which theme template a page is rendered
//! with. The assignment is stored as post metadata; valid values are the
//! `default` sentinel plus the template files declared by the active theme
//! for the post being edited.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use customize_postmeta::host::{PassthroughLocalizer, StaticTheme, InMemoryPosts};
//! use customize_postmeta::page_template::PageTemplateController;
//!
//! let theme = StaticTheme::new([("templates/wide.html", "Wide")]);
//! let controller = PageTemplateController::new(
//!     Arc::new(theme),
//!     Arc::new(InMemoryPosts::new()),
//!     Arc::new(PassthroughLocalizer::new()),
//! );
//!
//! let choices: Vec<_> = controller.page_template_choices().collect();
//! assert_eq!(choices[0].value, "default");
//! assert_eq!(choices[1].value, "templates/wide.html");
//! ```

use crate::error::{CustomizeError, CustomizeResult};
use crate::field::{PostmetaFieldController, PostmetaSetting, TemplateChoice, Transport};
use crate::host::{Localizer, PostStore, ScriptRegistry, ThemeProvider};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Meta key the template assignment is stored under
pub const META_KEY: &str = "_page_template";

/// Post-type feature required for the field to be active
pub const POST_TYPE_SUPPORT: &str = "page-attributes";

/// Script handle enqueued for the preview UI
pub const SCRIPT_HANDLE: &str = "customize-page-template";

/// Sentinel value meaning "no explicit template, use the theme default"
pub const DEFAULT_TEMPLATE: &str = "default";

/// Export object attached to the control script as page data
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PageTemplateExports {
    default_page_template_choices: Vec<TemplateChoice>,
    l10n: ExportedStrings,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportedStrings {
    control_label: String,
}

/// Controller for the page template postmeta field
pub struct PageTemplateController {
    theme: Arc<dyn ThemeProvider>,
    posts: Arc<dyn PostStore>,
    l10n: Arc<dyn Localizer>,
}

impl PageTemplateController {
    /// Create a controller over the host's theme, post store, and localizer
    #[must_use]
    pub const fn new(
        theme: Arc<dyn ThemeProvider>,
        posts: Arc<dyn PostStore>,
        l10n: Arc<dyn Localizer>,
    ) -> Self {
        Self { theme, posts, l10n }
    }

    /// Choices offered to the preview UI
    ///
    /// The `default` sentinel comes first, then one choice per template file
    /// declared by the active theme, in declaration order. Reflects the
    /// theme's global template set; no post context is applied.
    #[must_use]
    pub fn page_template_choices(&self) -> impl Iterator<Item = TemplateChoice> + '_ {
        std::iter::once(TemplateChoice::new(
            DEFAULT_TEMPLATE,
            self.l10n.translate("(Default)"),
        ))
        .chain(
            self.theme
                .page_templates(None)
                .into_iter()
                .map(|(file, name)| TemplateChoice::new(file, name)),
        )
    }
}

impl PostmetaFieldController for PageTemplateController {
    fn meta_key(&self) -> &str {
        META_KEY
    }

    fn post_type_support(&self) -> &str {
        POST_TYPE_SUPPORT
    }

    fn transport(&self) -> Transport {
        Transport::Refresh
    }

    fn default_value(&self) -> &str {
        DEFAULT_TEMPLATE
    }

    fn enqueue_scripts(&self, scripts: &mut dyn ScriptRegistry) -> CustomizeResult<()> {
        scripts.enqueue(SCRIPT_HANDLE);
        scripts.add_inline(SCRIPT_HANDLE, "CustomizePageTemplate.init()");

        let exports = PageTemplateExports {
            default_page_template_choices: self.page_template_choices().collect(),
            l10n: ExportedStrings {
                control_label: self.l10n.translate("Page Template"),
            },
        };
        let data = format!(
            "var _customizePageTemplateExports = {}",
            serde_json::to_string(&exports)?
        );
        scripts.add_data(SCRIPT_HANDLE, &data);
        Ok(())
    }

    /// Lexical cleanup of a submitted template path
    ///
    /// Strips the traversal/truncation sequences `".."` and `"./"` and NUL
    /// bytes, in that order, then removes leading `/` characters. No
    /// validation against the theme's template set happens here.
    fn sanitize_value(&self, raw: &str) -> String {
        let path = raw.replace("..", "");
        let path = path.replace("./", "");
        let path = path.replace('\0', "");
        path.trim_start_matches('/').to_owned()
    }

    fn sanitize_setting(
        &self,
        value: &str,
        setting: &PostmetaSetting,
        strict: bool,
    ) -> CustomizeResult<Option<String>> {
        let post = self.posts.post(setting.post_id);
        let page_templates = self.theme.page_templates(post.as_ref());

        let registered = value == DEFAULT_TEMPLATE
            || page_templates.iter().any(|(file, _)| file == value);
        if !registered {
            if strict {
                warn!(
                    post_id = %setting.post_id,
                    page_template = %value,
                    "rejected invalid page template"
                );
                return Err(CustomizeError::InvalidPageTemplate {
                    message: self.l10n.translate("The page template is invalid."),
                });
            }
            debug!(
                post_id = %setting.post_id,
                page_template = %value,
                "discarded invalid page template"
            );
            return Ok(None);
        }
        Ok(Some(value.to_owned()))
    }
}
