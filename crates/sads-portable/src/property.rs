//! Semantic key to CSS property mapping, and property to theme category.
//!
//! Deliberately self-contained: this crate re-derives the mapping tables
//! rather than sharing code with the native engine, so that agreement
//! between the two is proven by the golden vectors, not by construction.

/// Maps a camelCase semantic key to a CSS property name.
///
/// `None` only for empty input and the deliberately non-stylable
/// `layoutType`; unknown keys pass through as their kebab-cased form.
pub fn map_to_css_property(semantic_key: &str) -> Option<String> {
    if semantic_key.is_empty() {
        return None;
    }
    let kebab = to_kebab_case(semantic_key);
    let mapped = match kebab.as_str() {
        "layout-type" => return None,
        "bg-color" => "background-color",
        "text-color" => "color",
        "flex-justify" => "justify-content",
        "flex-align-items" => "align-items",
        "shadow" => "box-shadow",
        _ => return Some(kebab),
    };
    Some(mapped.to_string())
}

/// Whether a semantic key is deliberately non-stylable.
pub fn is_non_stylable(semantic_key: &str) -> bool {
    to_kebab_case(semantic_key) == "layout-type"
}

/// The theme category a CSS property's tokens live in, if any.
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

/// Categories whose tokens form a fixed enumeration; a lookup miss there
/// resolves to nothing instead of falling back to the token text.
pub fn is_enum_category(category: &str) -> bool {
    matches!(category, "colors" | "spacing" | "fontWeight" | "borderRadius")
}

fn to_kebab_case(key: &str) -> String {
    let mut kebab = String::with_capacity(key.len() + 4);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!(map_to_css_property("bgColor").as_deref(), Some("background-color"));
        assert_eq!(map_to_css_property("textColor").as_deref(), Some("color"));
        assert_eq!(map_to_css_property("flexJustify").as_deref(), Some("justify-content"));
        assert_eq!(map_to_css_property("shadow").as_deref(), Some("box-shadow"));
    }

    #[test]
    fn test_passthrough_and_exclusions() {
        assert_eq!(map_to_css_property("paddingTop").as_deref(), Some("padding-top"));
        assert_eq!(map_to_css_property("opacity").as_deref(), Some("opacity"));
        assert_eq!(map_to_css_property("layoutType"), None);
        assert_eq!(map_to_css_property(""), None);
        assert!(is_non_stylable("layoutType"));
    }

    #[test]
    fn test_category_table() {
        assert_eq!(category_for("padding"), Some("spacing"));
        assert_eq!(category_for("border-bottom-color"), Some("colors"));
        assert_eq!(category_for("box-shadow"), Some("shadow"));
        assert_eq!(category_for("display"), None);
        assert!(is_enum_category("colors"));
        assert!(!is_enum_category("fontSize"));
    }
}
