//! Integration tests for the postmeta field lifecycle
//!
//! Drives the registry and the page template controller through the two
//! host lifecycle phases (asset enqueue, value sanitize) using the
//! in-memory host implementations.

use std::sync::Arc;

use customize_postmeta::field::{FieldRegistry, PostmetaSetting};
use customize_postmeta::host::{
    CollectedScripts, InMemoryPosts, Post, PostId, StaticTheme, TableLocalizer,
};
use customize_postmeta::page_template::{self, PageTemplateController};
use customize_postmeta::CustomizeError;

/// Host fixture with one landing page and a theme that scopes its templates
fn registry_fixture() -> (FieldRegistry, PostmetaSetting) {
    let theme = StaticTheme::new([
        ("templates/full-width.html", "Full Width"),
        ("templates/sidebar.html", "Sidebar"),
    ])
    .with_post_type_templates("landing", [("templates/full-width.html", "Full Width")]);

    let mut posts = InMemoryPosts::new();
    posts.insert(Post::new(PostId(10), "landing"));

    let l10n = TableLocalizer::new([
        ("Page Template", "Modèle de page"),
        ("(Default)", "(Par défaut)"),
        ("The page template is invalid.", "Le modèle de page est invalide."),
    ]);

    let controller =
        PageTemplateController::new(Arc::new(theme), Arc::new(posts), Arc::new(l10n));

    let mut registry = FieldRegistry::new();
    registry.register(Arc::new(controller)).unwrap();
    (registry, PostmetaSetting::new(PostId(10)))
}

#[test]
fn enqueue_phase_exports_localized_choices() {
    let (registry, _) = registry_fixture();
    let mut scripts = CollectedScripts::new();
    registry.enqueue_all(&mut scripts).unwrap();

    assert_eq!(scripts.enqueued(), [page_template::SCRIPT_HANDLE.to_owned()]);

    let (_, data) = &scripts.data()[0];
    let json = data
        .strip_prefix("var _customizePageTemplateExports = ")
        .unwrap();
    let exports: serde_json::Value = serde_json::from_str(json).unwrap();

    let choices = exports["defaultPageTemplateChoices"].as_array().unwrap();
    assert_eq!(choices.len(), 3);
    assert_eq!(choices[0]["value"], "default");
    assert_eq!(choices[0]["text"], "(Par défaut)");
    assert_eq!(choices[1]["value"], "templates/full-width.html");
    assert_eq!(exports["l10n"]["controlLabel"], "Modèle de page");
}

#[test]
fn sanitize_phase_dispatches_through_the_registry() {
    let (registry, setting) = registry_fixture();
    let controller = registry.get(page_template::META_KEY).unwrap();

    // The landing post only sees the scoped template set.
    let accepted = controller
        .sanitize_setting("templates/full-width.html", &setting, false)
        .unwrap();
    assert_eq!(accepted.as_deref(), Some("templates/full-width.html"));

    let rejected = controller
        .sanitize_setting("templates/sidebar.html", &setting, false)
        .unwrap();
    assert!(rejected.is_none());

    let err = controller
        .sanitize_setting("templates/sidebar.html", &setting, true)
        .unwrap_err();
    assert_eq!(err.to_string(), "Le modèle de page est invalide.");
}

#[test]
fn sanitize_value_is_independent_of_validation() {
    let (registry, setting) = registry_fixture();
    let controller = registry.get(page_template::META_KEY).unwrap();

    // Lexical cleanup accepts anything; validation still rejects the result
    // unless the theme registered it.
    let cleaned = controller.sanitize_value("../templates/full-width.html");
    assert_eq!(cleaned, "templates/full-width.html");
    let accepted = controller.sanitize_setting(&cleaned, &setting, false).unwrap();
    assert_eq!(accepted.as_deref(), Some("templates/full-width.html"));

    let cleaned = controller.sanitize_value("/../evil\0.html");
    assert_eq!(cleaned, "evil.html");
    assert!(controller
        .sanitize_setting(&cleaned, &setting, false)
        .unwrap()
        .is_none());
}

#[test]
fn duplicate_registration_is_refused() {
    let (mut registry, _) = registry_fixture();
    let controller = PageTemplateController::new(
        Arc::new(StaticTheme::default()),
        Arc::new(InMemoryPosts::new()),
        Arc::new(TableLocalizer::default()),
    );

    let err = registry.register(Arc::new(controller)).unwrap_err();
    assert!(matches!(
        err,
        CustomizeError::DuplicateField { meta_key } if meta_key == page_template::META_KEY
    ));
}

#[test]
fn support_gate_controls_which_fields_are_active() {
    let (registry, _) = registry_fixture();
    let supports = |post_type: &str, feature: &str| post_type == "page" && feature == "page-attributes";

    assert_eq!(registry.controllers_for("page", supports).count(), 1);
    assert_eq!(registry.controllers_for("attachment", supports).count(), 0);
}
