//! Semantic attribute-driven styling.
//!
//! Elements declare *what they mean* through semantic attributes
//! (`data-sads-bg-color="surface"`, `data-sads-padding="m"`); this crate
//! resolves those declarations against a themable token store and emits
//! concrete, scoped CSS. The resolved look of a page is a pure function of
//! three inputs: the attribute state, the theme, and the dark-mode flag.
//!
//! The pipeline, module by module:
//!
//! - [`theme`]: the token store (twelve flat categories), deep-merged
//!   overrides, OS color-mode detection
//! - [`property`]: semantic key to CSS property mapping
//! - [`value`]: the six-way attribute value union and its classifier
//! - [`resolver`]: token to CSS literal, with dark-mode probing
//! - [`parser`]: dataset attributes to classified styling sets
//! - [`responsive`]: breakpoint rules to media-query CSS
//! - [`sheet`]: scope classes and full-rebuild stylesheet management
//! - [`dom`]: the minimal element tree the engine walks
//! - [`engine`]: orchestration; [`Engine::apply_styles`] ties it together
//! - [`backend`]: the serialized resolution contract with a second,
//!   independent implementation in the `sads-portable` crate
//! - [`wire`]: the message schema for cross-boundary styling requests
//!
//! # Example
//!
//! ```rust
//! use sads::{Document, Element, Engine};
//!
//! let mut card = Element::new();
//! card.mark_component("card");
//! card.set_data_attr("data-sads-bg-color", "surface");
//! card.set_data_attr("data-sads-padding", "l");
//! card.set_data_attr("data-sads-border-radius", "m");
//!
//! let mut doc = Document::with_mode(false);
//! doc.push_root(card);
//!
//! let mut engine = Engine::new();
//! engine.apply_styles(&mut doc);
//! let css = engine.css_text();
//! assert!(css.starts_with(".sads-scope-0 {\n"));
//! assert!(css.contains("padding: 24px;\n"));
//! ```

pub mod backend;
pub mod dom;
pub mod engine;
pub mod error;
pub mod parser;
pub mod property;
pub mod resolver;
pub mod responsive;
pub mod sheet;
pub mod theme;
pub mod value;
pub mod wire;

pub use backend::{CategorySources, NativeBackend, ResolverBackend};
pub use dom::{dataset_key, Document, Element};
pub use engine::Engine;
pub use error::BoundaryError;
pub use parser::{parse, ElementStyles, ResponsiveStyle, StylingSet};
pub use property::map_to_css_property;
pub use resolver::{category_for, resolve, resolve_declaration, resolve_in_category};
pub use sheet::{CssRule, Stylesheet, StylesheetManager, SCOPE_CLASS_PREFIX};
pub use theme::{
    default_theme, deep_merge, detect_color_mode, set_mode_detector, Category, ColorMode, Theme,
};
pub use value::{AttrValue, BorderRadiusToken, ColorToken, FontWeightToken, SpacingToken};
pub use wire::{decode_request, resolve_request, StylingRequest, StylingResponse};
