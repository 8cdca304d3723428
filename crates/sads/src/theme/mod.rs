//! Theme system: token vocabularies and color mode.
//!
//! This module provides:
//!
//! - [`Theme`]: category/token maps with deep-merged overrides
//! - [`deep_merge`]: the JSON merge used to build themes
//! - [`ColorMode`]: light or dark color mode enum
//! - [`set_mode_detector`]: override OS mode detection (for tests and
//!   explicit toggles)
//!
//! Themes are plain data. Resolution logic lives in [`crate::resolver`].

mod default;
mod mode;
mod store;

pub use default::default_theme;
pub use mode::{detect_color_mode, set_mode_detector, ColorMode};
pub use store::{deep_merge, Category, Theme};
