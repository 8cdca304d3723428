//! Stylesheet management: scope classes, rule insertion, full rebuilds.
//!
//! The manager owns a single dynamically-managed stylesheet. Every
//! resolution pass clears it and re-emits everything; there is no
//! incremental diffing, which guarantees no stale rules survive a theme or
//! mode change at the cost of O(elements) work per pass.

use tracing::warn;

use crate::dom::Element;

/// Class prefix for the per-element scoping classes the manager mints.
pub const SCOPE_CLASS_PREFIX: &str = "sads-scope-";

/// One emitted rule: selector, declaration block, optional media query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssRule {
    pub selector: String,
    /// Declaration lines, each terminated by `;\n`.
    pub declarations: String,
    pub media_query: Option<String>,
}

/// The managed stylesheet: an ordered list of rules with a deterministic
/// textual rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    rules: Vec<CssRule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[CssRule] {
        &self.rules
    }

    /// Renders the full stylesheet text, rules in insertion order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            match &rule.media_query {
                Some(query) => {
                    out.push_str(&format!(
                        "@media {} {{\n{} {{\n{}}}\n}}\n",
                        query, rule.selector, rule.declarations
                    ));
                }
                None => {
                    out.push_str(&format!(
                        "{} {{\n{}}}\n",
                        rule.selector, rule.declarations
                    ));
                }
            }
        }
        out
    }
}

/// Owns the stylesheet and the scope-class counter.
///
/// A manager built without a sink (non-browser host) still accepts every
/// call; emission becomes a no-op, reported once.
#[derive(Debug)]
pub struct StylesheetManager {
    sheet: Option<Stylesheet>,
    next_scope_id: u64,
    missing_sink_reported: bool,
}

impl StylesheetManager {
    /// A manager emitting into an in-memory stylesheet.
    pub fn new() -> Self {
        Self {
            sheet: Some(Stylesheet::new()),
            next_scope_id: 0,
            missing_sink_reported: false,
        }
    }

    /// A manager with no stylesheet sink; resolution still runs, emission
    /// is a no-op.
    pub fn detached() -> Self {
        Self {
            sheet: None,
            next_scope_id: 0,
            missing_sink_reported: false,
        }
    }

    pub fn has_sink(&self) -> bool {
        self.sheet.is_some()
    }

    /// Starts a fresh full-rebuild pass: clears every rule and rewinds the
    /// scope counter. Elements that already carry a scope class keep it, so
    /// identity is stable across passes.
    pub fn begin_pass(&mut self) {
        self.clear_all();
        self.next_scope_id = 0;
    }

    /// Deletes every rule from the managed stylesheet.
    pub fn clear_all(&mut self) {
        if let Some(sheet) = &mut self.sheet {
            sheet.rules.clear();
        }
    }

    /// Returns the element's scope class, minting and attaching one if it
    /// has none. Idempotent per element. Reusing a class advances the
    /// counter past its number, so a minted class can never collide with
    /// one already attached to a live element, regardless of visitation
    /// order or elements removed between passes.
    pub fn class_for(&mut self, element: &mut Element) -> String {
        if let Some(existing) = element.class_with_prefix(SCOPE_CLASS_PREFIX) {
            let existing = existing.to_string();
            if let Ok(id) = existing[SCOPE_CLASS_PREFIX.len()..].parse::<u64>() {
                self.next_scope_id = self.next_scope_id.max(id + 1);
            }
            return existing;
        }
        let minted = format!("{SCOPE_CLASS_PREFIX}{}", self.next_scope_id);
        self.next_scope_id += 1;
        element.add_class(&minted);
        minted
    }

    /// Appends a rule, optionally wrapped in a media query. Empty
    /// declaration blocks are skipped entirely.
    pub fn insert_rule(&mut self, selector: &str, declarations: &str, media_query: Option<&str>) {
        if declarations.trim().is_empty() {
            return;
        }
        let Some(sheet) = &mut self.sheet else {
            if !self.missing_sink_reported {
                warn!("no stylesheet sink; style emission disabled");
                self.missing_sink_reported = true;
            }
            return;
        };
        sheet.rules.push(CssRule {
            selector: selector.to_string(),
            declarations: declarations.to_string(),
            media_query: media_query.map(str::to_string),
        });
    }

    pub fn stylesheet(&self) -> Option<&Stylesheet> {
        self.sheet.as_ref()
    }

    /// The current stylesheet text; empty when detached.
    pub fn css_text(&self) -> String {
        self.sheet.as_ref().map(Stylesheet::render).unwrap_or_default()
    }
}

impl Default for StylesheetManager {
    fn default() -> Self {
        Self::new()
    }
}
