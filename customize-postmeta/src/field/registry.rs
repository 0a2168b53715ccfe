//! Field controller registration
//!
//! The host registers every postmeta field controller it knows about once at
//! startup, then dispatches lifecycle calls through the registry: enqueue
//! fanout during the asset phase, per-meta-key lookup during the sanitize
//! phase of a setting write.

use super::PostmetaFieldController;
use crate::error::{CustomizeError, CustomizeResult};
use crate::host::ScriptRegistry;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Registered field controllers, keyed by meta key
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use customize_postmeta::field::FieldRegistry;
/// use customize_postmeta::host::{PassthroughLocalizer, StaticTheme, InMemoryPosts};
/// use customize_postmeta::page_template::PageTemplateController;
///
/// let controller = PageTemplateController::new(
///     Arc::new(StaticTheme::default()),
///     Arc::new(InMemoryPosts::new()),
///     Arc::new(PassthroughLocalizer::new()),
/// );
///
/// let mut registry = FieldRegistry::new();
/// registry.register(Arc::new(controller)).unwrap();
/// assert!(registry.get("_page_template").is_some());
/// ```
#[derive(Clone, Default)]
pub struct FieldRegistry {
    controllers: Vec<Arc<dyn PostmetaFieldController>>,
    by_meta_key: HashMap<String, usize>,
}

impl FieldRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a controller for its meta key
    ///
    /// Registration order is preserved for enqueue fanout.
    ///
    /// # Errors
    ///
    /// Returns [`CustomizeError::DuplicateField`] if a controller is already
    /// registered for the same meta key.
    pub fn register(&mut self, controller: Arc<dyn PostmetaFieldController>) -> CustomizeResult<()> {
        let meta_key = controller.meta_key().to_owned();
        if self.by_meta_key.contains_key(&meta_key) {
            return Err(CustomizeError::DuplicateField { meta_key });
        }
        debug!(meta_key = %meta_key, "registered postmeta field controller");
        self.by_meta_key.insert(meta_key, self.controllers.len());
        self.controllers.push(controller);
        Ok(())
    }

    /// Look up the controller for a meta key
    #[must_use]
    pub fn get(&self, meta_key: &str) -> Option<&Arc<dyn PostmetaFieldController>> {
        self.by_meta_key
            .get(meta_key)
            .map(|&index| &self.controllers[index])
    }

    /// Number of registered controllers
    #[must_use]
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Controllers active for a post type, in registration order
    ///
    /// `supports` is the host's post-type capability check: it receives the
    /// post type and a controller's required feature and reports whether the
    /// post type supports it.
    #[must_use]
    pub fn controllers_for<'a, F>(
        &'a self,
        post_type: &'a str,
        supports: F,
    ) -> impl Iterator<Item = &'a Arc<dyn PostmetaFieldController>>
    where
        F: Fn(&str, &str) -> bool + 'a,
    {
        self.controllers
            .iter()
            .filter(move |controller| supports(post_type, controller.post_type_support()))
    }

    /// Asset-enqueue phase: let every controller load its scripts
    ///
    /// # Errors
    ///
    /// Propagates the first controller enqueue failure.
    pub fn enqueue_all(&self, scripts: &mut dyn ScriptRegistry) -> CustomizeResult<()> {
        for controller in &self.controllers {
            controller.enqueue_scripts(scripts)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for FieldRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRegistry")
            .field("meta_keys", &self.by_meta_key.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
