//! Token resolution over already-parsed category maps.

use std::collections::BTreeMap;

use crate::error::PortableError;
use crate::property::is_enum_category;

/// A theme category: token name to CSS literal.
pub type Category = BTreeMap<String, String>;

/// Resolves a color token against a colors map.
///
/// `custom:` literals pass straight through; `transparent` resolves
/// without a lookup; in dark mode the `<token>-dark` entry is probed before
/// the token itself. Colors are an enumerated category, so a miss resolves
/// to nothing.
pub fn resolve_color_token(token: &str, colors: &Category, is_dark_mode: bool) -> Option<String> {
    if token.is_empty() {
        return None;
    }
    if let Some(literal) = token.strip_prefix("custom:") {
        return Some(literal.to_string());
    }
    if token == "transparent" {
        return Some("transparent".to_string());
    }
    if is_dark_mode {
        let dark_key = format!("{token}-dark");
        if let Some(literal) = colors.get(&dark_key) {
            return Some(literal.clone());
        }
    }
    colors.get(token).cloned()
}

/// Resolves a token against one named category map.
///
/// Colors get the dark-mode treatment; the other enumerated categories are
/// a plain lookup with no fallback; free-form categories fall back to the
/// token text itself on a miss.
pub fn resolve_in_map(
    token: &str,
    category_name: &str,
    entries: &Category,
    is_dark_mode: bool,
) -> Option<String> {
    if token.is_empty() {
        return None;
    }
    if let Some(literal) = token.strip_prefix("custom:") {
        return Some(literal.to_string());
    }
    if category_name == "colors" {
        return resolve_color_token(token, entries, is_dark_mode);
    }
    match entries.get(token) {
        Some(literal) => Some(literal.clone()),
        None if is_enum_category(category_name) => None,
        None => Some(token.to_string()),
    }
}

/// Resolves a token against a serialized category blob.
///
/// The boundary form of [`resolve_in_map`]: the category arrives as a JSON
/// object string (empty string for an absent category). `Ok(None)` means
/// the caller omits the declaration.
pub fn resolve_value(
    token: &str,
    category_json: &str,
    category_name: &str,
    is_dark_mode: bool,
) -> Result<Option<String>, PortableError> {
    if token.is_empty() {
        return Ok(None);
    }
    let entries = parse_category(category_name, category_json)?;
    Ok(resolve_in_map(token, category_name, &entries, is_dark_mode))
}

pub(crate) fn parse_category(name: &str, blob: &str) -> Result<Category, PortableError> {
    if blob.trim().is_empty() {
        return Ok(Category::new());
    }
    serde_json::from_str(blob).map_err(|err| PortableError::MalformedCategory {
        category: name.to_string(),
        message: err.to_string(),
    })
}
