//! The serialized attribute schema.
//!
//! Cross-boundary calls carry element styles in a message schema: an
//! attribute value is a six-way oneof (four enumerated token families, a
//! free-form literal, a custom literal), a styling set is a string-keyed
//! map of values, and element styles are an optional base set plus repeated
//! breakpoint-keyed sets. Enumerated tokens travel as prefixed constant
//! names (`COLOR_TOKEN_PRIMARY`, `SPACING_TOKEN_M`); the schema itself is a
//! given contract, so field names are fixed here, not chosen.
//!
//! Encoding is deterministic (sorted maps, no optional whitespace), so
//! decode-then-encode reproduces a canonically encoded message byte for
//! byte.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::error::BoundaryError;
use crate::parser::{ElementStyles, ResponsiveStyle, StylingSet};
use crate::resolver::resolve_declaration;
use crate::responsive;
use crate::theme::{Category, Theme};
use crate::value::{AttrValue, BorderRadiusToken, ColorToken, FontWeightToken, SpacingToken};

const COLOR_TOKEN_PREFIX: &str = "COLOR_TOKEN";
const SPACING_TOKEN_PREFIX: &str = "SPACING_TOKEN";
const FONT_WEIGHT_TOKEN_PREFIX: &str = "FONT_WEIGHT_TOKEN";
const BORDER_RADIUS_TOKEN_PREFIX: &str = "BORDER_RADIUS_TOKEN";

/// A wire value failed to decode into an attribute value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WireError {
    #[error("token constant '{token}' lacks the '{prefix}_' prefix")]
    BadTokenPrefix {
        token: String,
        prefix: &'static str,
    },
}

/// The oneof over attribute values, as it crosses the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireAttributeValue {
    SpacingToken(String),
    ColorToken(String),
    FontWeightToken(String),
    BorderRadiusToken(String),
    FontSizeValue(String),
    CustomValue(String),
}

/// A string-keyed map of attribute values, keyed by semantic name.
pub type WireStylingSet = BTreeMap<String, WireAttributeValue>;

/// One responsive rule on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireResponsiveStyle {
    #[serde(rename = "breakpointKey", default)]
    pub breakpoint_key: String,
    #[serde(default)]
    pub styles: WireStylingSet,
}

/// Element styles on the wire: optional base set plus repeated responsive
/// rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireElementStyles {
    #[serde(
        rename = "baseStyles",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub base_styles: Option<WireStylingSet>,
    #[serde(
        rename = "responsiveStyles",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub responsive_styles: Vec<WireResponsiveStyle>,
}

/// Per-call context accompanying a styling request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireContext {
    #[serde(rename = "isDarkMode", default)]
    pub is_dark_mode: bool,
}

/// A resolved-styling request: element styles, call context, and the theme
/// categories the resolution may consult, each as its own JSON blob.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylingRequest {
    #[serde(rename = "elementStyles", default)]
    pub element_styles: WireElementStyles,
    #[serde(default)]
    pub context: WireContext,
    #[serde(
        rename = "themeCategories",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub theme_categories: BTreeMap<String, String>,
}

/// The pure response: resolved CSS text, nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylingResponse {
    #[serde(rename = "cssText")]
    pub css_text: String,
}

impl From<&AttrValue> for WireAttributeValue {
    fn from(value: &AttrValue) -> Self {
        match value {
            AttrValue::Spacing(token) => {
                WireAttributeValue::SpacingToken(encode_token(SPACING_TOKEN_PREFIX, token.semantic_key()))
            }
            AttrValue::Color(token) => {
                WireAttributeValue::ColorToken(encode_token(COLOR_TOKEN_PREFIX, token.semantic_key()))
            }
            AttrValue::FontWeight(token) => WireAttributeValue::FontWeightToken(encode_token(
                FONT_WEIGHT_TOKEN_PREFIX,
                token.semantic_key(),
            )),
            AttrValue::BorderRadius(token) => WireAttributeValue::BorderRadiusToken(encode_token(
                BORDER_RADIUS_TOKEN_PREFIX,
                token.semantic_key(),
            )),
            AttrValue::Literal(text) => WireAttributeValue::FontSizeValue(text.clone()),
            AttrValue::Custom(text) => WireAttributeValue::CustomValue(text.clone()),
        }
    }
}

impl TryFrom<&WireAttributeValue> for AttrValue {
    type Error = WireError;

    fn try_from(wire: &WireAttributeValue) -> Result<Self, WireError> {
        Ok(match wire {
            WireAttributeValue::SpacingToken(token) => AttrValue::Spacing(SpacingToken::from_raw(
                &decode_token(SPACING_TOKEN_PREFIX, token)?,
            )),
            WireAttributeValue::ColorToken(token) => AttrValue::Color(ColorToken::from_raw(
                &decode_token(COLOR_TOKEN_PREFIX, token)?,
            )),
            WireAttributeValue::FontWeightToken(token) => AttrValue::FontWeight(
                FontWeightToken::from_raw(&decode_token(FONT_WEIGHT_TOKEN_PREFIX, token)?),
            ),
            WireAttributeValue::BorderRadiusToken(token) => AttrValue::BorderRadius(
                BorderRadiusToken::from_raw(&decode_token(BORDER_RADIUS_TOKEN_PREFIX, token)?),
            ),
            WireAttributeValue::FontSizeValue(text) => AttrValue::Literal(text.clone()),
            WireAttributeValue::CustomValue(text) => AttrValue::Custom(text.clone()),
        })
    }
}

/// `primary` becomes `COLOR_TOKEN_PRIMARY`; an unset token becomes
/// `COLOR_TOKEN_UNSPECIFIED`.
fn encode_token(prefix: &str, semantic_key: Option<&str>) -> String {
    match semantic_key {
        Some(key) => format!("{prefix}_{}", key.to_ascii_uppercase().replace('-', "_")),
        None => format!("{prefix}_UNSPECIFIED"),
    }
}

/// Inverse of [`encode_token`]: `COLOR_TOKEN_TEXT_PRIMARY` back to
/// `text-primary`, `UNSPECIFIED` back to the empty raw form.
fn decode_token(prefix: &'static str, wire_token: &str) -> Result<String, WireError> {
    let rest = wire_token
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('_'))
        .ok_or_else(|| WireError::BadTokenPrefix {
            token: wire_token.to_string(),
            prefix,
        })?;
    if rest == "UNSPECIFIED" {
        return Ok(String::new());
    }
    Ok(rest.to_ascii_lowercase().replace('_', "-"))
}

impl WireElementStyles {
    /// Encodes classified element styles for the boundary.
    pub fn encode(styles: &ElementStyles) -> Self {
        Self {
            base_styles: styles.base.as_ref().map(encode_set),
            responsive_styles: styles
                .responsive
                .iter()
                .map(|rule| WireResponsiveStyle {
                    breakpoint_key: rule.breakpoint_key.clone(),
                    styles: encode_set(&rule.styles),
                })
                .collect(),
        }
    }

    /// Decodes into classified element styles. An undecodable attribute is
    /// reported and dropped; the rest of the set survives.
    pub fn decode(&self) -> ElementStyles {
        ElementStyles {
            base: self.base_styles.as_ref().map(decode_set),
            responsive: self
                .responsive_styles
                .iter()
                .map(|rule| ResponsiveStyle {
                    breakpoint_key: rule.breakpoint_key.clone(),
                    styles: decode_set(&rule.styles),
                })
                .collect(),
        }
    }
}

fn encode_set(set: &StylingSet) -> WireStylingSet {
    set.iter()
        .map(|(key, value)| (key.clone(), WireAttributeValue::from(value)))
        .collect()
}

fn decode_set(set: &WireStylingSet) -> StylingSet {
    let mut decoded = StylingSet::new();
    for (key, wire) in set {
        match AttrValue::try_from(wire) {
            Ok(value) => {
                decoded.insert(key.clone(), value);
            }
            Err(err) => warn!(key = %key, %err, "dropping undecodable attribute value"),
        }
    }
    decoded
}

/// Decodes a serialized styling request. Shape errors come back as a
/// structured result, never a panic.
pub fn decode_request(raw: &str) -> Result<StylingRequest, BoundaryError> {
    serde_json::from_str(raw).map_err(|err| BoundaryError::MalformedRequest(err.to_string()))
}

/// Resolves a styling request into CSS text.
///
/// The theme is rebuilt from the request's category blobs on every call;
/// nothing is cached across requests, keeping this a pure function of its
/// input.
pub fn resolve_request(request: &StylingRequest) -> StylingResponse {
    let theme = theme_from_blobs(&request.theme_categories);
    let is_dark_mode = request.context.is_dark_mode;
    let styles = request.element_styles.decode();

    let mut css_text = String::new();
    if let Some(base) = &styles.base {
        for (key, value) in base {
            let Some((property, literal)) = resolve_declaration(key, value, &theme, is_dark_mode)
            else {
                continue;
            };
            css_text.push_str(&property);
            css_text.push_str(": ");
            css_text.push_str(&literal);
            css_text.push_str(";\n");
        }
    }
    for (media_query, block) in responsive::compile(&styles.responsive, &theme, is_dark_mode) {
        css_text.push_str(&format!("@media {media_query} {{\n{block}}}\n"));
    }
    StylingResponse { css_text }
}

/// Parses per-category JSON blobs into a theme. A malformed blob is
/// reported and skipped; the other categories still apply.
fn theme_from_blobs(blobs: &BTreeMap<String, String>) -> Theme {
    let mut categories = BTreeMap::new();
    for (name, blob) in blobs {
        if blob.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Category>(blob) {
            Ok(entries) => {
                categories.insert(name.clone(), entries);
            }
            Err(err) => warn!(category = %name, %err, "ignoring malformed theme category"),
        }
    }
    Theme::from_categories(categories)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_constant_encoding() {
        assert_eq!(
            encode_token(COLOR_TOKEN_PREFIX, Some("text-primary")),
            "COLOR_TOKEN_TEXT_PRIMARY"
        );
        assert_eq!(encode_token(SPACING_TOKEN_PREFIX, Some("m")), "SPACING_TOKEN_M");
        assert_eq!(encode_token(SPACING_TOKEN_PREFIX, None), "SPACING_TOKEN_UNSPECIFIED");
    }

    #[test]
    fn test_token_constant_decoding() {
        assert_eq!(
            decode_token(COLOR_TOKEN_PREFIX, "COLOR_TOKEN_TEXT_PRIMARY").as_deref(),
            Ok("text-primary")
        );
        assert_eq!(
            decode_token(SPACING_TOKEN_PREFIX, "SPACING_TOKEN_UNSPECIFIED").as_deref(),
            Ok("")
        );
        assert!(matches!(
            decode_token(COLOR_TOKEN_PREFIX, "SPACING_TOKEN_M"),
            Err(WireError::BadTokenPrefix { .. })
        ));
    }

    #[test]
    fn test_attribute_value_round_trip() {
        let values = [
            AttrValue::Color(ColorToken::Named("text-primary".into())),
            AttrValue::Color(ColorToken::Transparent),
            AttrValue::Spacing(SpacingToken::Named("m".into())),
            AttrValue::Spacing(SpacingToken::Unspecified),
            AttrValue::FontWeight(FontWeightToken::Named("semibold".into())),
            AttrValue::BorderRadius(BorderRadiusToken::Named("full".into())),
            AttrValue::Literal("1.25rem".into()),
            AttrValue::Custom("10px".into()),
        ];
        for value in values {
            let wire = WireAttributeValue::from(&value);
            assert_eq!(AttrValue::try_from(&wire), Ok(value));
        }
    }

    #[test]
    fn test_oneof_wire_shape() {
        let wire = WireAttributeValue::ColorToken("COLOR_TOKEN_PRIMARY".into());
        assert_eq!(
            serde_json::to_string(&wire).unwrap(),
            r#"{"color_token":"COLOR_TOKEN_PRIMARY"}"#
        );
        let wire = WireAttributeValue::FontSizeValue("1.5rem".into());
        assert_eq!(
            serde_json::to_string(&wire).unwrap(),
            r#"{"font_size_value":"1.5rem"}"#
        );
    }

    #[test]
    fn test_request_decode_then_encode_is_byte_identical() {
        let raw = concat!(
            r#"{"elementStyles":{"baseStyles":{"bgColor":{"color_token":"COLOR_TOKEN_PRIMARY"},"#,
            r#""padding":{"spacing_token":"SPACING_TOKEN_M"}},"#,
            r#""responsiveStyles":[{"breakpointKey":"mobile","styles":{"padding":{"spacing_token":"SPACING_TOKEN_S"}}}]},"#,
            r#""context":{"isDarkMode":true},"#,
            r##""themeCategories":{"colors":"{\"primary\":\"#007bff\"}"}}"##,
        );
        let request = decode_request(raw).unwrap();
        assert_eq!(serde_json::to_string(&request).unwrap(), raw);
    }

    #[test]
    fn test_decode_request_reports_shape_errors() {
        let err = decode_request("{\"elementStyles\": 7}").unwrap_err();
        assert!(matches!(err, BoundaryError::MalformedRequest(_)));
    }

    #[test]
    fn test_resolve_request_end_to_end() {
        let raw = concat!(
            r#"{"elementStyles":{"baseStyles":{"bgColor":{"color_token":"COLOR_TOKEN_PRIMARY"},"#,
            r#""fontSize":{"font_size_value":"1.1em"}},"#,
            r#""responsiveStyles":[{"breakpointKey":"mobile","styles":{"padding":{"spacing_token":"SPACING_TOKEN_S"}}}]},"#,
            r#""context":{"isDarkMode":true},"#,
            r#""themeCategories":{"#,
            r#""breakpoints":"{\"mobile\":\"(max-width: 600px)\"}","#,
            r##""colors":"{\"primary\":\"#007bff\",\"primary-dark\":\"#0056b3\"}","##,
            r#""spacing":"{\"s\":\"8px\"}"}}"#,
        );
        let response = resolve_request(&decode_request(raw).unwrap());
        assert_eq!(
            response.css_text,
            "background-color: #0056b3;\nfont-size: 1.1em;\n@media (max-width: 600px) {\npadding: 8px !important;\n}\n"
        );
    }

    #[test]
    fn test_resolve_request_skips_undecodable_attributes() {
        let mut base = WireStylingSet::new();
        base.insert(
            "bgColor".to_string(),
            WireAttributeValue::ColorToken("NOT_A_CONSTANT".into()),
        );
        base.insert(
            "padding".to_string(),
            WireAttributeValue::CustomValue("4px".into()),
        );
        let request = StylingRequest {
            element_styles: WireElementStyles {
                base_styles: Some(base),
                responsive_styles: Vec::new(),
            },
            ..StylingRequest::default()
        };
        assert_eq!(resolve_request(&request).css_text, "padding: 4px;\n");
    }
}
