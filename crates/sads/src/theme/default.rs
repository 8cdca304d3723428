//! The built-in default theme.

use serde_json::{json, Value};

/// Returns the default theme as a JSON object.
///
/// Caller-supplied overrides are deep-merged on top of this at engine
/// creation, so every category listed here can be extended or replaced
/// token-by-token. Color tokens come in light/dark pairs: the `-dark`
/// suffix is what dark-mode resolution probes first.
pub fn default_theme() -> Value {
    json!({
        "colors": {
            "primary": "#007bff",
            "primary-dark": "#0056b3",
            "secondary": "#6c757d",
            "secondary-dark": "#adb5bd",
            "accent": "#e8590c",
            "accent-dark": "#ff922b",
            "background": "#ffffff",
            "background-dark": "#121212",
            "surface": "#f8f9fa",
            "surface-dark": "#1e1e1e",
            "text-primary": "#212529",
            "text-primary-dark": "#e9ecef",
            "text-secondary": "#6c757d",
            "text-secondary-dark": "#adb5bd",
            "text-accent": "#e8590c",
            "text-accent-dark": "#ff922b",
            "border": "#dee2e6",
            "border-dark": "#343a40",
            "error": "#dc3545",
            "success": "#28a745"
        },
        "spacing": {
            "none": "0",
            "xs": "4px",
            "s": "8px",
            "m": "16px",
            "l": "24px",
            "xl": "32px",
            "xxl": "48px"
        },
        "fontSize": {
            "small": "0.875rem",
            "base": "1rem",
            "medium": "1.125rem",
            "large": "1.5rem",
            "xl": "2rem",
            "hero": "3rem"
        },
        "fontWeight": {
            "light": "300",
            "normal": "400",
            "medium": "500",
            "semibold": "600",
            "bold": "700"
        },
        "borderRadius": {
            "none": "0",
            "s": "4px",
            "m": "8px",
            "l": "16px",
            "full": "9999px"
        },
        "shadow": {
            "none": "none",
            "s": "0 1px 2px rgba(0, 0, 0, 0.08)",
            "m": "0 2px 8px rgba(0, 0, 0, 0.12)",
            "l": "0 8px 24px rgba(0, 0, 0, 0.16)"
        },
        "maxWidth": {
            "content": "65ch",
            "narrow": "640px",
            "wide": "1200px",
            "full": "100%"
        },
        "breakpoints": {
            "mobile": "(max-width: 600px)",
            "tablet": "(min-width: 601px) and (max-width: 1024px)",
            "desktop": "(min-width: 1025px)"
        },
        "flexBasis": {
            "auto": "auto",
            "half": "50%",
            "third": "33.333%",
            "full": "100%"
        },
        "objectFit": {
            "cover": "cover",
            "contain": "contain",
            "fill": "fill"
        },
        "fontStyle": {
            "normal": "normal",
            "italic": "italic"
        },
        "borderStyle": {
            "solid": "solid",
            "dashed": "dashed",
            "dotted": "dotted",
            "none": "none"
        }
    })
}
