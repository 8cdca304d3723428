//! The styling engine: orchestrates parsing, resolution, and emission.
//!
//! An [`Engine`] is an explicit, constructible value owning its theme and
//! its stylesheet manager; callers hold and pass the instance. One engine
//! belongs to one logical thread; nothing here synchronizes.

use serde_json::Value;

use crate::dom::{Document, Element};
use crate::parser;
use crate::resolver::resolve_declaration;
use crate::responsive;
use crate::sheet::{Stylesheet, StylesheetManager};
use crate::theme::Theme;

/// The semantic styling engine.
///
/// `apply_styles` is idempotent and re-entrant: for a fixed theme, document
/// state, and mode flag, consecutive passes produce byte-identical
/// stylesheet text. Every pass is a full rebuild (clear everything, then
/// re-emit), so no stale rule survives a theme or mode change.
///
/// # Example
///
/// ```rust
/// use sads::{Document, Element, Engine};
///
/// let mut root = Element::new();
/// root.mark_component("hero");
/// root.set_data_attr("data-sads-bg-color", "surface");
/// root.set_data_attr("data-sads-padding", "l");
///
/// let mut doc = Document::with_mode(false);
/// doc.push_root(root);
///
/// let mut engine = Engine::new();
/// engine.apply_styles(&mut doc);
/// assert!(engine.css_text().contains("background-color: #f8f9fa;"));
/// ```
#[derive(Debug)]
pub struct Engine {
    theme: Theme,
    sheets: StylesheetManager,
}

impl Engine {
    /// An engine with the default theme and an in-memory stylesheet.
    pub fn new() -> Self {
        Self::with_overrides(None)
    }

    /// An engine whose theme deep-merges the given overrides onto the
    /// default theme.
    pub fn with_overrides(overrides: Option<&Value>) -> Self {
        Self {
            theme: Theme::build(overrides),
            sheets: StylesheetManager::new(),
        }
    }

    /// An engine with no stylesheet sink. Resolution still runs on every
    /// pass; emission is a no-op, reported once.
    pub fn detached(overrides: Option<&Value>) -> Self {
        Self {
            theme: Theme::build(overrides),
            sheets: StylesheetManager::detached(),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replaces the theme wholesale (defaults plus the new overrides).
    /// Takes effect on the next `apply_styles` pass.
    pub fn update_theme(&mut self, overrides: Option<&Value>) {
        self.theme = Theme::build(overrides);
    }

    /// Runs one full resolution pass over the document.
    ///
    /// Walks every component root and its marked descendants, extracts base
    /// and responsive styles, resolves them against the theme and the
    /// document's mode flag, and re-emits the whole stylesheet.
    pub fn apply_styles(&mut self, doc: &mut Document) {
        let is_dark_mode = doc.dark_mode;
        self.sheets.begin_pass();
        for root in doc.roots_mut() {
            if !root.is_component_root() {
                continue;
            }
            self.style_subtree(root, is_dark_mode, true);
        }
    }

    /// The current stylesheet text; empty when detached.
    pub fn css_text(&self) -> String {
        self.sheets.css_text()
    }

    pub fn stylesheet(&self) -> Option<&Stylesheet> {
        self.sheets.stylesheet()
    }

    fn style_subtree(&mut self, element: &mut Element, is_dark_mode: bool, is_root: bool) {
        if is_root || element.is_styled_element() {
            self.style_element(element, is_dark_mode);
        }
        for child in element.children_mut() {
            self.style_subtree(child, is_dark_mode, false);
        }
    }

    fn style_element(&mut self, element: &mut Element, is_dark_mode: bool) {
        let Some(styles) = parser::parse(element.dataset()) else {
            return;
        };
        let scope_class = self.sheets.class_for(element);
        let selector = format!(".{scope_class}");

        if let Some(base) = &styles.base {
            let mut declarations = String::new();
            for (key, value) in base {
                let Some((property, literal)) =
                    resolve_declaration(key, value, &self.theme, is_dark_mode)
                else {
                    continue;
                };
                declarations.push_str(&property);
                declarations.push_str(": ");
                declarations.push_str(&literal);
                declarations.push_str(";\n");
            }
            self.sheets.insert_rule(&selector, &declarations, None);
        }

        let grouped = responsive::compile(&styles.responsive, &self.theme, is_dark_mode);
        for (media_query, block) in &grouped {
            self.sheets.insert_rule(&selector, block, Some(media_query));
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hero_root() -> Element {
        let mut root = Element::new();
        root.mark_component("hero");
        root.set_data_attr("data-sads-bg-color", "surface");
        root.set_data_attr("data-sads-padding", "m");

        let mut title = Element::new();
        title.mark_element("title");
        title.set_data_attr("data-sads-text-color", "text-primary");
        title.set_data_attr("data-sads-font-size", "large");
        root.push_child(title);

        let plain = Element::new();
        root.push_child(plain);
        root
    }

    #[test]
    fn test_apply_styles_emits_scoped_rules() {
        let mut doc = Document::with_mode(false);
        doc.push_root(hero_root());

        let mut engine = Engine::new();
        engine.apply_styles(&mut doc);

        let css = engine.css_text();
        assert!(css.contains(".sads-scope-0 {\n"));
        assert!(css.contains("background-color: #f8f9fa;\n"));
        assert!(css.contains("padding: 16px;\n"));
        assert!(css.contains(".sads-scope-1 {\n"));
        assert!(css.contains("color: #212529;\n"));
        assert!(css.contains("font-size: 1.5rem;\n"));
        // The unmarked child contributed nothing.
        assert_eq!(engine.stylesheet().unwrap().rules().len(), 2);
    }

    #[test]
    fn test_roots_without_component_marker_are_skipped() {
        let mut root = Element::new();
        root.set_data_attr("data-sads-padding", "m");
        let mut doc = Document::with_mode(false);
        doc.push_root(root);

        let mut engine = Engine::new();
        engine.apply_styles(&mut doc);
        assert_eq!(engine.css_text(), "");
    }

    #[test]
    fn test_responsive_rules_wrap_in_media_queries() {
        let mut root = Element::new();
        root.mark_component("hero");
        root.set_data_attr("data-sads-padding", "l");
        root.set_dataset_key(
            "sadsResponsiveRules",
            r#"[{"breakpoint": "mobile", "styles": {"padding": "s"}}]"#,
        );
        let mut doc = Document::with_mode(false);
        doc.push_root(root);

        let mut engine = Engine::new();
        engine.apply_styles(&mut doc);

        let css = engine.css_text();
        assert!(css.contains(".sads-scope-0 {\npadding: 24px;\n}\n"));
        assert!(css.contains(
            "@media (max-width: 600px) {\n.sads-scope-0 {\npadding: 8px !important;\n}\n}\n"
        ));
    }

    #[test]
    fn test_update_theme_changes_next_pass() {
        let mut doc = Document::with_mode(false);
        doc.push_root(hero_root());

        let mut engine = Engine::new();
        engine.apply_styles(&mut doc);
        assert!(engine.css_text().contains("padding: 16px;\n"));

        engine.update_theme(Some(&json!({"spacing": {"m": "20px"}})));
        engine.apply_styles(&mut doc);
        assert!(engine.css_text().contains("padding: 20px;\n"));
        assert!(!engine.css_text().contains("padding: 16px;\n"));
    }

    #[test]
    fn test_detached_engine_resolves_but_emits_nothing() {
        let mut doc = Document::with_mode(false);
        doc.push_root(hero_root());

        let mut engine = Engine::detached(None);
        engine.apply_styles(&mut doc);
        assert_eq!(engine.css_text(), "");
        // Scope classes were still assigned; identity survives a later
        // re-attach.
        assert!(doc.roots()[0].class_with_prefix("sads-scope-").is_some());
    }
}
