//! Attribute set parsing: dataset entries to classified styling sets.
//!
//! Styling declarations live in `data-sads-*` attributes, which a DOM
//! dataset exposes as camelCase keys with the reserved `sads` prefix
//! (`data-sads-bg-color` becomes `sadsBgColor`). Three control keys mark
//! structure rather than style and are excluded from parsing:
//! `sadsComponent`, `sadsElement`, and `sadsResponsiveRules` (which holds
//! a JSON array of responsive rules).

use std::collections::BTreeMap;

use tracing::warn;

use crate::responsive;
use crate::value::AttrValue;

/// The reserved dataset prefix identifying styling declarations.
pub const ATTR_PREFIX: &str = "sads";
/// Control key holding the responsive rules JSON array.
pub const RESPONSIVE_RULES_KEY: &str = "sadsResponsiveRules";
/// Control key marking a component root.
pub const COMPONENT_MARKER_KEY: &str = "sadsComponent";
/// Control key marking a styled descendant.
pub const ELEMENT_MARKER_KEY: &str = "sadsElement";

/// A set of classified attribute values keyed by unprefixed semantic name
/// (`bgColor`, `padding`). Keys are unique; ordering is irrelevant to
/// meaning but kept sorted so emission is deterministic.
pub type StylingSet = BTreeMap<String, AttrValue>;

/// One responsive rule: a breakpoint key and the styles it applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsiveStyle {
    /// Either a theme breakpoint name (`mobile`) or a verbatim media query.
    pub breakpoint_key: String,
    pub styles: StylingSet,
}

/// Everything styleable about one element: an optional base set plus an
/// ordered list of responsive rules.
///
/// These are ephemeral: rebuilt from DOM state on every resolution pass and
/// discarded once CSS text is produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementStyles {
    pub base: Option<StylingSet>,
    pub responsive: Vec<ResponsiveStyle>,
}

/// Parses a dataset-like attribute map into classified element styles.
///
/// Returns `None` when neither the base set nor any responsive rule yields
/// at least one attribute, so the engine never emits empty rules. A
/// malformed responsive rules payload is reported and treated as empty;
/// the base set still parses.
///
/// # Example
///
/// ```rust
/// use sads::{parse, AttrValue, ColorToken};
/// use std::collections::BTreeMap;
///
/// let mut dataset = BTreeMap::new();
/// dataset.insert("sadsBgColor".to_string(), "surface".to_string());
/// dataset.insert("sadsComponent".to_string(), "hero".to_string());
///
/// let styles = parse(&dataset).unwrap();
/// let base = styles.base.unwrap();
/// assert_eq!(
///     base.get("bgColor"),
///     Some(&AttrValue::Color(ColorToken::Named("surface".into())))
/// );
/// ```
pub fn parse(dataset: &BTreeMap<String, String>) -> Option<ElementStyles> {
    let mut base = StylingSet::new();
    for (key, raw) in dataset {
        let Some(semantic) = styling_key(key) else {
            continue;
        };
        base.insert(semantic.clone(), AttrValue::classify(&semantic, raw));
    }

    let responsive = match dataset.get(RESPONSIVE_RULES_KEY) {
        Some(raw) => match responsive::parse_rules(raw) {
            Ok(rules) => rules,
            Err(err) => {
                warn!(%err, "discarding malformed responsive rules");
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    let has_responsive = responsive.iter().any(|rule| !rule.styles.is_empty());
    if base.is_empty() && !has_responsive {
        return None;
    }
    Some(ElementStyles {
        base: if base.is_empty() { None } else { Some(base) },
        responsive,
    })
}

/// Extracts the unprefixed semantic key from a dataset key, or `None` for
/// control keys and keys outside the reserved prefix.
fn styling_key(dataset_key: &str) -> Option<String> {
    if dataset_key == RESPONSIVE_RULES_KEY
        || dataset_key == COMPONENT_MARKER_KEY
        || dataset_key == ELEMENT_MARKER_KEY
    {
        return None;
    }
    let rest = dataset_key.strip_prefix(ATTR_PREFIX)?;
    let mut chars = rest.chars();
    let first = chars.next()?;
    // "sadsomething" is not ours; the prefix boundary must be a capital.
    if !first.is_ascii_uppercase() {
        return None;
    }
    let mut semantic = String::with_capacity(rest.len());
    semantic.push(first.to_ascii_lowercase());
    semantic.extend(chars);
    Some(semantic)
}
