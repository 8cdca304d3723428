//! The attribute value tagged union and its per-family decoder.
//!
//! Every semantic attribute value is exactly one of six kinds: four
//! enumerated token families (spacing, color, font weight, border radius),
//! a free-form literal (font sizes and any other value-bearing property),
//! and a custom literal that bypasses theme resolution entirely.
//!
//! Classification is driven by a static table, not by inspecting the value:
//! the family of a key follows from the theme category of its mapped CSS
//! property. A `custom:` prefix always wins, regardless of key.

use crate::property::map_to_css_property;
use crate::resolver::category_for;

/// A color token. `transparent` is a first-class variant because it
/// resolves without any theme lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorToken {
    /// The unset sentinel; resolves to nothing.
    Unspecified,
    /// Always resolves to the literal `transparent`.
    Transparent,
    /// Any named token, e.g. `primary` or `text-accent`.
    Named(String),
}

impl ColorToken {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "" => ColorToken::Unspecified,
            "transparent" => ColorToken::Transparent,
            _ => ColorToken::Named(raw.to_string()),
        }
    }

    pub fn semantic_key(&self) -> Option<&str> {
        match self {
            ColorToken::Unspecified => None,
            ColorToken::Transparent => Some("transparent"),
            ColorToken::Named(name) => Some(name),
        }
    }
}

/// A spacing token, e.g. `m` or `xl`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpacingToken {
    Unspecified,
    Named(String),
}

impl SpacingToken {
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            SpacingToken::Unspecified
        } else {
            SpacingToken::Named(raw.to_string())
        }
    }

    pub fn semantic_key(&self) -> Option<&str> {
        match self {
            SpacingToken::Unspecified => None,
            SpacingToken::Named(name) => Some(name),
        }
    }
}

/// A font-weight token, e.g. `semibold`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontWeightToken {
    Unspecified,
    Named(String),
}

impl FontWeightToken {
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            FontWeightToken::Unspecified
        } else {
            FontWeightToken::Named(raw.to_string())
        }
    }

    pub fn semantic_key(&self) -> Option<&str> {
        match self {
            FontWeightToken::Unspecified => None,
            FontWeightToken::Named(name) => Some(name),
        }
    }
}

/// A border-radius token, e.g. `full`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorderRadiusToken {
    Unspecified,
    Named(String),
}

impl BorderRadiusToken {
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            BorderRadiusToken::Unspecified
        } else {
            BorderRadiusToken::Named(raw.to_string())
        }
    }

    pub fn semantic_key(&self) -> Option<&str> {
        match self {
            BorderRadiusToken::Unspecified => None,
            BorderRadiusToken::Named(name) => Some(name),
        }
    }
}

/// The six-way tagged union over semantic attribute values.
///
/// Exactly one variant is populated; "no value at all" is represented by the
/// token families' `Unspecified` sentinel. Enum-token variants with no theme
/// entry resolve to nothing (the declaration is omitted), while a [`Literal`]
/// with no theme entry resolves to itself. That asymmetry is deliberate and
/// load-bearing: an enum token has no meaningful literal fallback.
///
/// [`Literal`]: AttrValue::Literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Spacing(SpacingToken),
    Color(ColorToken),
    FontWeight(FontWeightToken),
    BorderRadius(BorderRadiusToken),
    /// A free-form literal that still consults the theme first (font sizes,
    /// shadows, max widths, and any property without a token family).
    Literal(String),
    /// A `custom:`-prefixed literal with the prefix stripped; never consults
    /// the theme.
    Custom(String),
}

impl AttrValue {
    /// Classifies a raw attribute value for the given semantic key.
    ///
    /// A `custom:` prefix is honored for every key. Otherwise the key's
    /// family is the theme category of its mapped CSS property: the four
    /// enumerated categories produce token variants, everything else is a
    /// free-form literal.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sads::{AttrValue, ColorToken, SpacingToken};
    ///
    /// assert_eq!(
    ///     AttrValue::classify("bgColor", "primary"),
    ///     AttrValue::Color(ColorToken::Named("primary".into()))
    /// );
    /// assert_eq!(
    ///     AttrValue::classify("padding", "m"),
    ///     AttrValue::Spacing(SpacingToken::Named("m".into()))
    /// );
    /// assert_eq!(
    ///     AttrValue::classify("fontSize", "custom:1.1em"),
    ///     AttrValue::Custom("1.1em".into())
    /// );
    /// ```
    pub fn classify(semantic_key: &str, raw: &str) -> Self {
        if let Some(literal) = raw.strip_prefix("custom:") {
            return AttrValue::Custom(literal.to_string());
        }
        let category = map_to_css_property(semantic_key)
            .as_deref()
            .and_then(category_for);
        match category {
            Some("colors") => AttrValue::Color(ColorToken::from_raw(raw)),
            Some("spacing") => AttrValue::Spacing(SpacingToken::from_raw(raw)),
            Some("fontWeight") => AttrValue::FontWeight(FontWeightToken::from_raw(raw)),
            Some("borderRadius") => AttrValue::BorderRadius(BorderRadiusToken::from_raw(raw)),
            _ => AttrValue::Literal(raw.to_string()),
        }
    }

    /// The token's semantic key: what gets looked up in a theme category.
    ///
    /// `None` for unspecified sentinels and for custom literals (which are
    /// returned before any lookup happens).
    pub fn semantic_key(&self) -> Option<&str> {
        match self {
            AttrValue::Spacing(token) => token.semantic_key(),
            AttrValue::Color(token) => token.semantic_key(),
            AttrValue::FontWeight(token) => token.semantic_key(),
            AttrValue::BorderRadius(token) => token.semantic_key(),
            AttrValue::Literal(text) => Some(text),
            AttrValue::Custom(_) => None,
        }
    }

    /// Whether this value came from a fixed token enumeration (as opposed to
    /// a free-form literal). Enum tokens have no literal fallback.
    pub fn is_enum_token(&self) -> bool {
        matches!(
            self,
            AttrValue::Spacing(_)
                | AttrValue::Color(_)
                | AttrValue::FontWeight(_)
                | AttrValue::BorderRadius(_)
        )
    }
}
