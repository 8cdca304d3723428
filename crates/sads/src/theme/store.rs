//! Theme storage: category/token maps built by deep-merging overrides
//! onto the default theme.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use super::default::default_theme;

/// A single theme category: token name to opaque CSS literal.
pub type Category = BTreeMap<String, String>;

/// An in-memory theme: category name to token map.
///
/// Values are opaque CSS literals and are never interpreted further. The
/// theme is owned by the engine and replaced wholesale when it changes;
/// resolution only ever reads it.
///
/// # Example
///
/// ```rust
/// use sads::Theme;
/// use serde_json::json;
///
/// let theme = Theme::build(Some(&json!({
///     "colors": { "primary": "#ff0066" }
/// })));
/// assert_eq!(theme.token("colors", "primary"), Some("#ff0066"));
/// // Untouched categories keep their defaults.
/// assert_eq!(theme.token("spacing", "m"), Some("16px"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    categories: BTreeMap<String, Category>,
}

impl Theme {
    /// Builds a theme by deep-merging `overrides` onto the default theme.
    ///
    /// Override scalars replace base scalars; nested objects merge
    /// recursively; arrays and mismatched shapes replace entirely. After the
    /// merge, `border-accent` / `border-accent-dark` aliases are synthesized
    /// from `text-accent` / `text-accent-dark` when those exist.
    pub fn build(overrides: Option<&Value>) -> Self {
        let mut merged = default_theme();
        if let Some(overrides) = overrides {
            deep_merge(&mut merged, overrides);
        }
        let mut theme = Self::from_value(&merged);
        theme.synthesize_border_aliases();
        theme
    }

    /// Builds a theme from a bare JSON object, without the defaults.
    ///
    /// Categories that are not objects and tokens that are not strings are
    /// skipped. Used at the serialized boundary, where the caller supplies
    /// every category it cares about.
    pub fn from_value(value: &Value) -> Self {
        let mut categories = BTreeMap::new();
        if let Value::Object(object) = value {
            for (name, tokens) in object {
                let Value::Object(tokens) = tokens else {
                    debug!(category = %name, "skipping non-object theme category");
                    continue;
                };
                let mut category = Category::new();
                for (token, literal) in tokens {
                    if let Value::String(literal) = literal {
                        category.insert(token.clone(), literal.clone());
                    }
                }
                categories.insert(name.clone(), category);
            }
        }
        Self { categories }
    }

    /// Builds a theme directly from already-parsed category maps.
    pub fn from_categories(categories: BTreeMap<String, Category>) -> Self {
        Self { categories }
    }

    /// Looks up a category by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// Looks up a token literal within a category.
    pub fn token(&self, category: &str, token: &str) -> Option<&str> {
        self.categories
            .get(category)?
            .get(token)
            .map(String::as_str)
    }

    /// Resolves a breakpoint key to its media query, if the theme defines it.
    pub fn breakpoint(&self, key: &str) -> Option<&str> {
        self.token("breakpoints", key)
    }

    /// Derives `border-accent` / `border-accent-dark` from the accent text
    /// colors. Skipped with a diagnostic when the source tokens are absent;
    /// explicit entries are never overwritten.
    fn synthesize_border_aliases(&mut self) {
        let Some(colors) = self.categories.get_mut("colors") else {
            debug!("no colors category; skipping border-accent alias synthesis");
            return;
        };
        if !colors.contains_key("text-accent") {
            debug!("colors lacks text-accent; skipping border-accent alias synthesis");
            return;
        }
        for (alias, source) in [
            ("border-accent", "text-accent"),
            ("border-accent-dark", "text-accent-dark"),
        ] {
            if colors.contains_key(alias) {
                continue;
            }
            if let Some(literal) = colors.get(source).cloned() {
                colors.insert(alias.to_string(), literal);
            }
        }
    }
}

/// Deep-merges `overrides` into `base`.
///
/// When both sides hold plain JSON objects the merge recurses; in every
/// other case (scalars, arrays, nulls, shape mismatches) the override value
/// replaces the base value entirely. There is no partial merging within a
/// single token value.
pub fn deep_merge(base: &mut Value, overrides: &Value) {
    match (base, overrides) {
        (Value::Object(base_map), Value::Object(override_map)) => {
            for (key, incoming) in override_map {
                match base_map.get_mut(key) {
                    Some(existing) if existing.is_object() && incoming.is_object() => {
                        deep_merge(existing, incoming);
                    }
                    _ => {
                        base_map.insert(key.clone(), incoming.clone());
                    }
                }
            }
        }
        (slot, incoming) => *slot = incoming.clone(),
    }
}
