//! Token resolution: semantic value to CSS literal.
//!
//! This is the heart of the engine and a pure function: given a CSS
//! property, a classified attribute value, a theme and the dark-mode flag,
//! it produces a CSS literal or nothing. The same algorithm is implemented
//! a second time, over JSON-serialized inputs, in the `sads-portable`
//! crate; the two are held equivalent by a shared golden vector set.

use tracing::{debug, warn};

use crate::property::{is_non_stylable, map_to_css_property};
use crate::theme::Theme;
use crate::value::{AttrValue, ColorToken};

/// Maps a CSS property name to the theme category its tokens live in.
///
/// Properties absent from this table (`display`, `text-align`, ...) carry
/// direct CSS values and never consult the theme.
pub fn category_for(css_property: &str) -> Option<&'static str> {
    let category = match css_property {
        "padding" | "padding-top" | "padding-bottom" | "padding-left" | "padding-right"
        | "margin" | "margin-top" | "margin-bottom" | "margin-left" | "margin-right" | "gap"
        | "border-width" | "width" | "height" => "spacing",
        "background-color" | "color" | "border-color" | "border-bottom-color" => "colors",
        "font-size" => "fontSize",
        "font-weight" => "fontWeight",
        "font-style" => "fontStyle",
        "border-radius" => "borderRadius",
        "border-style" => "borderStyle",
        "box-shadow" => "shadow",
        "max-width" => "maxWidth",
        "flex-basis" => "flexBasis",
        "object-fit" => "objectFit",
        _ => return None,
    };
    Some(category)
}

/// Resolves an attribute value against the theme.
///
/// The steps run in strict order:
///
/// 1. Custom literals are returned unconditionally.
/// 2. No CSS property, no resolution.
/// 3. An unspecified sentinel resolves to nothing.
/// 4. The color token `transparent` resolves without a theme lookup.
/// 5. For color-category properties in dark mode, `<token>-dark` is probed
///    first.
/// 6. The category's own token entry is probed.
/// 7. On a miss, enum tokens resolve to nothing; free-form literals resolve
///    to themselves.
///
/// # Example
///
/// ```rust
/// use sads::{resolve, AttrValue, ColorToken, Theme};
/// use serde_json::json;
///
/// let theme = Theme::build(Some(&json!({
///     "colors": { "primary": "#007bff", "primary-dark": "#0056b3" }
/// })));
/// let value = AttrValue::Color(ColorToken::Named("primary".into()));
///
/// assert_eq!(
///     resolve(Some("background-color"), &value, &theme, false).as_deref(),
///     Some("#007bff")
/// );
/// assert_eq!(
///     resolve(Some("background-color"), &value, &theme, true).as_deref(),
///     Some("#0056b3")
/// );
/// ```
pub fn resolve(
    css_property: Option<&str>,
    value: &AttrValue,
    theme: &Theme,
    is_dark_mode: bool,
) -> Option<String> {
    if let AttrValue::Custom(literal) = value {
        return Some(literal.clone());
    }
    let property = css_property?;
    resolve_in_category(category_for(property), value, theme, is_dark_mode)
}

/// Resolves against a theme category directly, for callers that already
/// know the category (the serialized boundary passes category names, not
/// CSS properties). Same algorithm as [`resolve`] from step 3 onward.
pub fn resolve_in_category(
    category: Option<&str>,
    value: &AttrValue,
    theme: &Theme,
    is_dark_mode: bool,
) -> Option<String> {
    if let AttrValue::Custom(literal) = value {
        return Some(literal.clone());
    }
    let key = value.semantic_key()?;
    if matches!(value, AttrValue::Color(ColorToken::Transparent)) {
        return Some("transparent".to_string());
    }
    if let Some(category) = category {
        if category == "colors" && is_dark_mode {
            let dark_key = format!("{key}-dark");
            if let Some(literal) = theme.token("colors", &dark_key) {
                return Some(literal.to_string());
            }
        }
        if let Some(literal) = theme.token(category, key) {
            return Some(literal.to_string());
        }
    }
    match value {
        AttrValue::Literal(literal) => Some(literal.clone()),
        _ => None,
    }
}

/// Maps and resolves one semantic declaration, returning the CSS property
/// name and literal, or `None` when the declaration must be omitted.
///
/// Unmapped keys are skipped with a warning, except deliberately
/// non-stylable ones which are skipped quietly. An unresolved token omits
/// the declaration entirely; `property: undefined` is never emitted.
pub fn resolve_declaration(
    semantic_key: &str,
    value: &AttrValue,
    theme: &Theme,
    is_dark_mode: bool,
) -> Option<(String, String)> {
    let Some(property) = map_to_css_property(semantic_key) else {
        if is_non_stylable(semantic_key) {
            debug!(key = semantic_key, "skipping non-stylable key");
        } else {
            warn!(key = semantic_key, "skipping unmapped semantic property");
        }
        return None;
    };
    let literal = resolve(Some(&property), value, theme, is_dark_mode)?;
    if literal.is_empty() {
        return None;
    }
    Some((property, literal))
}
