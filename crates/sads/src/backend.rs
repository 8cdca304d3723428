//! The resolver backend seam.
//!
//! Hosts that cannot link the engine directly (or that swap resolution
//! implementations) talk to a [`ResolverBackend`]: every input crosses as a
//! JSON string or a plain scalar, every output comes back as plain data and
//! no object state crosses the boundary. [`NativeBackend`] implements the
//! trait over this crate's own resolver; the `sads-portable` crate ships an
//! independent implementation of the same contract, and the two are held
//! bit-identical by a shared golden vector set.

use std::collections::BTreeMap;

use tracing::warn;

use crate::error::BoundaryError;
use crate::resolver::resolve_in_category;
use crate::responsive;
use crate::theme::{Category, Theme};
use crate::value::{AttrValue, BorderRadiusToken, ColorToken, FontWeightToken, SpacingToken};

/// Per-category theme JSON blobs, as a host hands them across the boundary.
///
/// Each field is a JSON object mapping token name to CSS literal; an empty
/// string stands for an absent category. Breakpoints travel separately
/// because they are not a token category.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategorySources<'a> {
    pub colors: &'a str,
    pub spacing: &'a str,
    pub font_size: &'a str,
    pub font_weight: &'a str,
    pub font_style: &'a str,
    pub border_radius: &'a str,
    pub border_style: &'a str,
    pub shadow: &'a str,
    pub max_width: &'a str,
    pub flex_basis: &'a str,
    pub object_fit: &'a str,
}

impl<'a> CategorySources<'a> {
    /// The sources paired with their theme category names.
    pub fn iter(&self) -> [(&'static str, &'a str); 11] {
        [
            ("colors", self.colors),
            ("spacing", self.spacing),
            ("fontSize", self.font_size),
            ("fontWeight", self.font_weight),
            ("fontStyle", self.font_style),
            ("borderRadius", self.border_radius),
            ("borderStyle", self.border_style),
            ("shadow", self.shadow),
            ("maxWidth", self.max_width),
            ("flexBasis", self.flex_basis),
            ("objectFit", self.object_fit),
        ]
    }
}

/// The serialized resolution contract.
pub trait ResolverBackend {
    /// Resolves one raw token against a single category blob. `Ok(None)`
    /// means the declaration is omitted.
    fn resolve_value(
        &self,
        token: &str,
        category_json: &str,
        category_name: &str,
        is_dark_mode: bool,
    ) -> Result<Option<String>, BoundaryError>;

    /// Compiles a responsive rules JSON array into CSS text grouped by
    /// resolved media query.
    fn compile_responsive_rules(
        &self,
        rules_json: &str,
        breakpoints_json: &str,
        sources: &CategorySources<'_>,
        is_dark_mode: bool,
    ) -> Result<BTreeMap<String, String>, BoundaryError>;
}

/// The in-process backend, delegating to this crate's resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeBackend;

impl NativeBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ResolverBackend for NativeBackend {
    fn resolve_value(
        &self,
        token: &str,
        category_json: &str,
        category_name: &str,
        is_dark_mode: bool,
    ) -> Result<Option<String>, BoundaryError> {
        if token.is_empty() {
            return Ok(None);
        }
        let entries = parse_category(category_name, category_json)?;
        let theme = Theme::from_categories(BTreeMap::from([(category_name.to_string(), entries)]));
        let value = classify_in_category(category_name, token);
        Ok(resolve_in_category(
            Some(category_name),
            &value,
            &theme,
            is_dark_mode,
        ))
    }

    fn compile_responsive_rules(
        &self,
        rules_json: &str,
        breakpoints_json: &str,
        sources: &CategorySources<'_>,
        is_dark_mode: bool,
    ) -> Result<BTreeMap<String, String>, BoundaryError> {
        let rules = responsive::parse_rules(rules_json)?;
        let breakpoints: Category = if breakpoints_json.trim().is_empty() {
            Category::new()
        } else {
            serde_json::from_str(breakpoints_json)
                .map_err(|err| BoundaryError::MalformedBreakpoints(err.to_string()))?
        };

        let mut categories = BTreeMap::new();
        for (name, blob) in sources.iter() {
            // One bad category blob degrades to "no tokens from that
            // category", not a failed compile.
            match parse_category(name, blob) {
                Ok(entries) => {
                    categories.insert(name.to_string(), entries);
                }
                Err(err) => warn!(category = name, %err, "ignoring malformed theme category"),
            }
        }
        categories.insert("breakpoints".to_string(), breakpoints);

        let theme = Theme::from_categories(categories);
        Ok(responsive::compile(&rules, &theme, is_dark_mode))
    }
}

fn parse_category(name: &str, blob: &str) -> Result<Category, BoundaryError> {
    if blob.trim().is_empty() {
        return Ok(Category::new());
    }
    serde_json::from_str(blob).map_err(|err| BoundaryError::MalformedCategory {
        category: name.to_string(),
        message: err.to_string(),
    })
}

/// Classifies a raw token by its theme category name. The boundary carries
/// category names, not semantic keys, so this mirrors
/// [`AttrValue::classify`] one table-step later.
fn classify_in_category(category_name: &str, raw: &str) -> AttrValue {
    if let Some(literal) = raw.strip_prefix("custom:") {
        return AttrValue::Custom(literal.to_string());
    }
    match category_name {
        "colors" => AttrValue::Color(ColorToken::from_raw(raw)),
        "spacing" => AttrValue::Spacing(SpacingToken::from_raw(raw)),
        "fontWeight" => AttrValue::FontWeight(FontWeightToken::from_raw(raw)),
        "borderRadius" => AttrValue::BorderRadius(BorderRadiusToken::from_raw(raw)),
        _ => AttrValue::Literal(raw.to_string()),
    }
}
