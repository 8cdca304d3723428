//! Responsive rule compilation over serialized inputs.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::PortableError;
use crate::property::{category_for, is_non_stylable, map_to_css_property};
use crate::resolver::{parse_category, resolve_in_map, Category};

/// Per-category theme JSON blobs, one field per category the resolution may
/// consult. An empty string stands for an absent category.
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

#[derive(Debug, Deserialize)]
struct RawRule {
    #[serde(default)]
    breakpoint: String,
    #[serde(default)]
    styles: BTreeMap<String, String>,
}

/// Compiles a responsive rules JSON array into CSS text grouped by
/// resolved media query.
///
/// Rules are `{breakpoint, styles}` objects; `styles` maps semantic keys to
/// raw token strings. Breakpoint keys resolve through the breakpoints map,
/// unknown keys are used verbatim. Every emitted declaration carries
/// `!important` so responsive rules override base rules at equal
/// specificity. A malformed category blob degrades to an empty category;
/// malformed rules or breakpoints JSON is a structured error.
pub fn compile_responsive_rules(
    rules_json: &str,
    breakpoints_json: &str,
    sources: &CategorySources<'_>,
    is_dark_mode: bool,
) -> Result<BTreeMap<String, String>, PortableError> {
    let rules: Vec<RawRule> = serde_json::from_str(rules_json)
        .map_err(|err| PortableError::MalformedRules(err.to_string()))?;
    let breakpoints: Category = if breakpoints_json.trim().is_empty() {
        Category::new()
    } else {
        serde_json::from_str(breakpoints_json)
            .map_err(|err| PortableError::MalformedBreakpoints(err.to_string()))?
    };

    let mut categories: BTreeMap<&str, Category> = BTreeMap::new();
    for (name, blob) in sources.iter() {
        match parse_category(name, blob) {
            Ok(entries) => {
                categories.insert(name, entries);
            }
            Err(err) => {
                warn!(category = name, %err, "ignoring malformed theme category");
                categories.insert(name, Category::new());
            }
        }
    }
    let empty = Category::new();

    let mut grouped: BTreeMap<String, String> = BTreeMap::new();
    for rule in &rules {
        let media_query = breakpoints
            .get(&rule.breakpoint)
            .unwrap_or(&rule.breakpoint)
            .to_string();
        let block = grouped.entry(media_query).or_default();
        for (key, raw) in &rule.styles {
            let Some(property) = map_to_css_property(key) else {
                if is_non_stylable(key) {
                    debug!(key = %key, "skipping non-stylable key");
                } else {
                    warn!(key = %key, "skipping unmapped semantic property");
                }
                continue;
            };
            let literal = match category_for(&property) {
                Some(category) => resolve_in_map(
                    raw,
                    category,
                    categories.get(category).unwrap_or(&empty),
                    is_dark_mode,
                ),
                None => resolve_in_map(raw, "", &empty, is_dark_mode),
            };
            let Some(literal) = literal else {
                continue;
            };
            if literal.is_empty() {
                continue;
            }
            block.push_str(&property);
            block.push_str(": ");
            block.push_str(&literal);
            block.push_str(" !important;\n");
        }
    }
    Ok(grouped)
}
