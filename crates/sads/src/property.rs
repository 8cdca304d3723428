//! Semantic property key to CSS property name mapping.
//!
//! Semantic keys arrive in camelCase (`bgColor`, `paddingTop`). Mapping
//! folds them to kebab-case, then consults a fixed alias table for the
//! handful of keys whose CSS name differs (`bgColor` is
//! `background-color`, not `bg-color`). Keys absent from the table pass
//! through as their kebab form, which is assumed to already be a valid
//! CSS property name; this is the escape hatch for properties the table
//! never anticipated.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Semantic keys that deliberately do not map to any CSS property.
///
/// `layout-type` is consumed by higher-level layout logic, never emitted
/// as a declaration.
const NON_STYLABLE_KEYS: &[&str] = &["layout-type"];

/// Fixed alias table from kebab-cased semantic keys to CSS property names.
///
/// Identity entries document the supported vocabulary; the renames are the
/// ones that actually change the lookup result.
static ALIAS_TABLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("bg-color", "background-color"),
        ("text-color", "color"),
        ("font-size", "font-size"),
        ("font-weight", "font-weight"),
        ("font-style", "font-style"),
        ("text-align", "text-align"),
        ("text-decoration", "text-decoration"),
        ("border-radius", "border-radius"),
        ("border-width", "border-width"),
        ("border-style", "border-style"),
        ("border-color", "border-color"),
        ("max-width", "max-width"),
        ("width", "width"),
        ("height", "height"),
        ("display", "display"),
        ("flex-direction", "flex-direction"),
        ("flex-wrap", "flex-wrap"),
        ("flex-justify", "justify-content"),
        ("flex-align-items", "align-items"),
        ("flex-basis", "flex-basis"),
        ("flex-grow", "flex-grow"),
        ("gap", "gap"),
        ("shadow", "box-shadow"),
        ("object-fit", "object-fit"),
        ("padding", "padding"),
        ("padding-top", "padding-top"),
        ("padding-bottom", "padding-bottom"),
        ("padding-left", "padding-left"),
        ("padding-right", "padding-right"),
        ("margin", "margin"),
        ("margin-top", "margin-top"),
        ("margin-bottom", "margin-bottom"),
        ("margin-left", "margin-left"),
        ("margin-right", "margin-right"),
        ("position", "position"),
        ("top", "top"),
        ("left", "left"),
        ("right", "right"),
        ("bottom", "bottom"),
        ("z-index", "z-index"),
        ("overflow", "overflow"),
        ("list-style", "list-style"),
        ("border-bottom-width", "border-bottom-width"),
        ("border-bottom-style", "border-bottom-style"),
        ("border-bottom-color", "border-bottom-color"),
        ("min-height", "min-height"),
        ("grid-template-columns", "grid-template-columns"),
        ("resize", "resize"),
        ("cursor", "cursor"),
        ("transition", "transition"),
        ("box-sizing", "box-sizing"),
    ])
});

/// Maps a semantic attribute key to a CSS property name.
///
/// Returns `None` only for empty input and for keys explicitly marked
/// non-stylable; every other key resolves, either through the alias table
/// or as its own kebab-cased form.
///
/// # Example
///
/// ```rust
/// use sads::map_to_css_property;
///
/// assert_eq!(map_to_css_property("bgColor").as_deref(), Some("background-color"));
/// assert_eq!(map_to_css_property("flexJustify").as_deref(), Some("justify-content"));
/// assert_eq!(map_to_css_property("opacity").as_deref(), Some("opacity"));
/// assert_eq!(map_to_css_property("layoutType"), None);
/// ```
pub fn map_to_css_property(semantic_key: &str) -> Option<String> {
    if semantic_key.is_empty() {
        return None;
    }
    let kebab = to_kebab_case(semantic_key);
    if NON_STYLABLE_KEYS.contains(&kebab.as_str()) {
        return None;
    }
    match ALIAS_TABLE.get(kebab.as_str()) {
        Some(mapped) => Some((*mapped).to_string()),
        None => Some(kebab),
    }
}

/// Whether a semantic key is deliberately non-stylable (maps to no CSS
/// property and should be skipped without a warning).
pub fn is_non_stylable(semantic_key: &str) -> bool {
    NON_STYLABLE_KEYS.contains(&to_kebab_case(semantic_key).as_str())
}

/// Converts a camelCase (or PascalCase) key to kebab-case.
///
/// A run of consecutive capitals folds to lowercase with no hyphens
/// inside or after it, and the first character never produces a leading
/// hyphen.
pub fn to_kebab_case(key: &str) -> String {
    let mut kebab = String::with_capacity(key.len() + 4);
    // Starting "previous was uppercase" suppresses the leading hyphen.
    let mut prev_upper = true;
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            if !prev_upper {
                kebab.push('-');
            }
            kebab.push(ch.to_ascii_lowercase());
            prev_upper = true;
        } else {
            kebab.push(ch);
            prev_upper = false;
        }
    }
    kebab
}
