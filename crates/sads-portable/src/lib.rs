//! Host-independent token resolution for semantic attribute styling.
//!
//! This crate is the portable twin of the `sads` engine's resolver: two
//! free functions over JSON-serialized primitives and booleans, carrying no
//! shared object state, safe to call from any thread. It exists for hosts
//! that embed resolution behind a serialization boundary rather than
//! linking the full engine.
//!
//! It deliberately shares no code with `sads`. Both crates implement the
//! same resolution algorithm; their agreement is proven by a golden vector
//! suite run against both, not assumed from a common implementation.
//!
//! # Example
//!
//! ```rust
//! use sads_portable::resolve_value;
//!
//! let colors = r##"{"primary": "#007bff", "primary-dark": "#0056b3"}"##;
//! let resolved = resolve_value("primary", colors, "colors", true).unwrap();
//! assert_eq!(resolved.as_deref(), Some("#0056b3"));
//! ```

pub mod error;
pub mod property;
pub mod resolver;
pub mod responsive;

pub use error::PortableError;
pub use property::{category_for, is_enum_category, map_to_css_property};
pub use resolver::{resolve_color_token, resolve_value, Category};
pub use responsive::{compile_responsive_rules, CategorySources};
