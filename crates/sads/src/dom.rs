//! The DOM boundary, modelled explicitly.
//!
//! The engine does not own a browser; it walks this lightweight element
//! tree, which mirrors exactly the parts of the DOM it touches: dataset
//! attributes, class lists, component/element markers, and the document's
//! dark-mode flag. Hosts build this tree from whatever their real document
//! looks like.

use std::collections::BTreeMap;

use crate::parser::{COMPONENT_MARKER_KEY, ELEMENT_MARKER_KEY};
use crate::theme::{detect_color_mode, ColorMode};

/// One element: dataset attributes, classes, children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    dataset: BTreeMap<String, String>,
    classes: Vec<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute by its HTML name, e.g. `data-sads-bg-color`.
    ///
    /// Only `data-*` attributes are representable; anything else is
    /// ignored, since the engine never reads other attributes.
    pub fn set_data_attr(&mut self, name: &str, value: &str) {
        if let Some(key) = dataset_key(name) {
            self.dataset.insert(key, value.to_string());
        }
    }

    /// Sets a dataset entry by its camelCase dataset key, e.g. `sadsBgColor`.
    pub fn set_dataset_key(&mut self, key: &str, value: &str) {
        self.dataset.insert(key.to_string(), value.to_string());
    }

    pub fn dataset(&self) -> &BTreeMap<String, String> {
        &self.dataset
    }

    /// Marks this element as a component root.
    pub fn mark_component(&mut self, name: &str) {
        self.dataset
            .insert(COMPONENT_MARKER_KEY.to_string(), name.to_string());
    }

    /// Marks this element as a styled descendant.
    pub fn mark_element(&mut self, name: &str) {
        self.dataset
            .insert(ELEMENT_MARKER_KEY.to_string(), name.to_string());
    }

    pub fn is_component_root(&self) -> bool {
        self.dataset.contains_key(COMPONENT_MARKER_KEY)
    }

    pub fn is_styled_element(&self) -> bool {
        self.dataset.contains_key(ELEMENT_MARKER_KEY)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// First class starting with the given prefix, if any.
    pub fn class_with_prefix(&self, prefix: &str) -> Option<&str> {
        self.classes
            .iter()
            .map(String::as_str)
            .find(|class| class.starts_with(prefix))
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }
}

/// The document the engine styles: component roots plus the mode flag the
/// resolution pass reads once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub dark_mode: bool,
    roots: Vec<Element>,
}

impl Document {
    /// A document whose mode flag follows the detected OS color mode.
    pub fn new() -> Self {
        Self {
            dark_mode: detect_color_mode() == ColorMode::Dark,
            roots: Vec::new(),
        }
    }

    /// A document with an explicit mode flag (e.g. a host-wired toggle).
    pub fn with_mode(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            roots: Vec::new(),
        }
    }

    pub fn push_root(&mut self, root: Element) {
        self.roots.push(root);
    }

    pub fn roots(&self) -> &[Element] {
        &self.roots
    }

    pub fn roots_mut(&mut self) -> &mut [Element] {
        &mut self.roots
    }
}

/// Converts an HTML data-attribute name to its dataset key:
/// `data-sads-bg-color` becomes `sadsBgColor`.
pub fn dataset_key(attr_name: &str) -> Option<String> {
    let rest = attr_name.strip_prefix("data-")?;
    if rest.is_empty() {
        return None;
    }
    let mut key = String::with_capacity(rest.len());
    let mut upper_next = false;
    for ch in rest.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            key.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            key.push(ch);
        }
    }
    Some(key)
}
