//! Responsive rule compilation: breakpoint-keyed rules to media-query CSS.
//!
//! Responsive declarations always carry `!important`: they must override
//! the element's base rule, which lives earlier in the same stylesheet at
//! the same specificity, without any source-order games.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::BoundaryError;
use crate::parser::{ResponsiveStyle, StylingSet};
use crate::resolver::resolve_declaration;
use crate::theme::Theme;
use crate::value::AttrValue;

/// The wire shape of one responsive rule.
#[derive(Debug, Deserialize)]
struct RawRule {
    #[serde(default)]
    breakpoint: String,
    #[serde(default)]
    styles: BTreeMap<String, String>,
}

/// Parses a responsive rules JSON array into classified rules.
///
/// The input is a list of `{breakpoint, styles}` objects where `styles` is
/// a flat map of semantic key to raw token string. Malformed JSON is a
/// reported failure, never a panic.
pub fn parse_rules(raw: &str) -> Result<Vec<ResponsiveStyle>, BoundaryError> {
    let raw_rules: Vec<RawRule> =
        serde_json::from_str(raw).map_err(|err| BoundaryError::MalformedRules(err.to_string()))?;
    Ok(raw_rules
        .into_iter()
        .map(|rule| ResponsiveStyle {
            breakpoint_key: rule.breakpoint,
            styles: rule
                .styles
                .iter()
                .map(|(key, value)| (key.clone(), AttrValue::classify(key, value)))
                .collect::<StylingSet>(),
        })
        .collect())
}

/// Compiles classified responsive rules into CSS text grouped by resolved
/// media query.
///
/// Breakpoint keys resolve through `theme.breakpoints`; unknown keys are
/// used verbatim as media queries, which is how ad-hoc one-off queries are
/// expressed. Multiple rules targeting the same resolved query accumulate
/// into one block, in rule order.
pub fn compile(
    rules: &[ResponsiveStyle],
    theme: &Theme,
    is_dark_mode: bool,
) -> BTreeMap<String, String> {
    let mut grouped: BTreeMap<String, String> = BTreeMap::new();
    for rule in rules {
        let media_query = theme
            .breakpoint(&rule.breakpoint_key)
            .unwrap_or(&rule.breakpoint_key)
            .to_string();
        let block = grouped.entry(media_query).or_default();
        for (key, value) in &rule.styles {
            let Some((property, literal)) = resolve_declaration(key, value, theme, is_dark_mode)
            else {
                continue;
            };
            block.push_str(&property);
            block.push_str(": ");
            block.push_str(&literal);
            block.push_str(" !important;\n");
        }
    }
    grouped
}

/// Parses and compiles in one step, for callers holding the raw JSON.
pub fn compile_json(
    raw: &str,
    theme: &Theme,
    is_dark_mode: bool,
) -> Result<BTreeMap<String, String>, BoundaryError> {
    let rules = parse_rules(raw)?;
    Ok(compile(&rules, theme, is_dark_mode))
}
