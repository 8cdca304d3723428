//! Golden vectors run against both resolver backends.
//!
//! The native backend and the independently written `sads-portable` crate
//! implement the same resolution contract. Every vector here is checked
//! against its expected output on both backends, and the two outputs are
//! checked against each other, so a drift in either implementation fails
//! loudly.

use std::collections::BTreeMap;

use sads::{CategorySources, NativeBackend, ResolverBackend};

const COLORS: &str = r##"{"primary": "#007bff", "primary-dark": "#0056b3", "surface": "#f8f9fa", "surface-dark": "#1e1e1e", "error": "#dc3545"}"##;
const SPACING: &str = r#"{"none": "0", "s": "8px", "m": "16px", "l": "24px"}"#;
const FONT_SIZE: &str = r#"{"base": "1rem", "large": "1.5rem"}"#;
const FONT_WEIGHT: &str = r#"{"normal": "400", "bold": "700"}"#;
const BORDER_RADIUS: &str = r#"{"s": "4px", "full": "9999px"}"#;
const BREAKPOINTS: &str =
    r#"{"mobile": "(max-width: 600px)", "tablet": "(min-width: 601px) and (max-width: 1024px)"}"#;

struct ValueVector {
    token: &'static str,
    category_json: &'static str,
    category_name: &'static str,
    is_dark_mode: bool,
    expected: Option<&'static str>,
}

const VALUE_VECTORS: &[ValueVector] = &[
    ValueVector {
        token: "primary",
        category_json: COLORS,
        category_name: "colors",
        is_dark_mode: false,
        expected: Some("#007bff"),
    },
    ValueVector {
        token: "primary",
        category_json: COLORS,
        category_name: "colors",
        is_dark_mode: true,
        expected: Some("#0056b3"),
    },
    // No -dark pair: dark mode falls back to the base entry.
    ValueVector {
        token: "error",
        category_json: COLORS,
        category_name: "colors",
        is_dark_mode: true,
        expected: Some("#dc3545"),
    },
    ValueVector {
        token: "transparent",
        category_json: "{}",
        category_name: "colors",
        is_dark_mode: true,
        expected: Some("transparent"),
    },
    // Unknown enum token: omitted, not echoed back.
    ValueVector {
        token: "foo",
        category_json: COLORS,
        category_name: "colors",
        is_dark_mode: false,
        expected: None,
    },
    ValueVector {
        token: "m",
        category_json: SPACING,
        category_name: "spacing",
        is_dark_mode: false,
        expected: Some("16px"),
    },
    ValueVector {
        token: "m",
        category_json: SPACING,
        category_name: "spacing",
        is_dark_mode: true,
        expected: Some("16px"),
    },
    ValueVector {
        token: "nope",
        category_json: SPACING,
        category_name: "spacing",
        is_dark_mode: false,
        expected: None,
    },
    ValueVector {
        token: "bold",
        category_json: FONT_WEIGHT,
        category_name: "fontWeight",
        is_dark_mode: false,
        expected: Some("700"),
    },
    ValueVector {
        token: "full",
        category_json: BORDER_RADIUS,
        category_name: "borderRadius",
        is_dark_mode: false,
        expected: Some("9999px"),
    },
    ValueVector {
        token: "large",
        category_json: FONT_SIZE,
        category_name: "fontSize",
        is_dark_mode: false,
        expected: Some("1.5rem"),
    },
    // Free-form literal miss echoes the token.
    ValueVector {
        token: "1.1em",
        category_json: FONT_SIZE,
        category_name: "fontSize",
        is_dark_mode: false,
        expected: Some("1.1em"),
    },
    // Custom bypass, any category, any mode.
    ValueVector {
        token: "custom:3vw",
        category_json: SPACING,
        category_name: "spacing",
        is_dark_mode: true,
        expected: Some("3vw"),
    },
    ValueVector {
        token: "custom:#abcdef",
        category_json: "{}",
        category_name: "colors",
        is_dark_mode: true,
        expected: Some("#abcdef"),
    },
    ValueVector {
        token: "",
        category_json: SPACING,
        category_name: "spacing",
        is_dark_mode: false,
        expected: None,
    },
];

struct RuleVector {
    name: &'static str,
    rules_json: &'static str,
    is_dark_mode: bool,
    expected: &'static [(&'static str, &'static str)],
}

const RULE_VECTORS: &[RuleVector] = &[
    RuleVector {
        name: "single spacing rule",
        rules_json: r#"[{"breakpoint": "mobile", "styles": {"padding": "s"}}]"#,
        is_dark_mode: false,
        expected: &[("(max-width: 600px)", "padding: 8px !important;\n")],
    },
    RuleVector {
        name: "unknown breakpoint verbatim",
        rules_json: r#"[{"breakpoint": "(min-height: 500px)", "styles": {"gap": "m"}}]"#,
        is_dark_mode: false,
        expected: &[("(min-height: 500px)", "gap: 16px !important;\n")],
    },
    RuleVector {
        name: "accumulation and ordering",
        rules_json: r#"[
            {"breakpoint": "mobile", "styles": {"padding": "s", "flexDirection": "column"}},
            {"breakpoint": "(max-width: 600px)", "styles": {"bgColor": "surface"}},
            {"breakpoint": "tablet", "styles": {"margin": "l"}}
        ]"#,
        is_dark_mode: false,
        expected: &[
            (
                "(max-width: 600px)",
                "flex-direction: column !important;\npadding: 8px !important;\nbackground-color: #f8f9fa !important;\n",
            ),
            (
                "(min-width: 601px) and (max-width: 1024px)",
                "margin: 24px !important;\n",
            ),
        ],
    },
    RuleVector {
        name: "dark mode colors",
        rules_json: r#"[{"breakpoint": "mobile", "styles": {"textColor": "surface", "padding": "m"}}]"#,
        is_dark_mode: true,
        expected: &[(
            "(max-width: 600px)",
            "padding: 16px !important;\ncolor: #1e1e1e !important;\n",
        )],
    },
    RuleVector {
        name: "misses and customs",
        rules_json: r#"[{"breakpoint": "mobile", "styles": {"padding": "nope", "width": "custom:50%", "display": "grid"}}]"#,
        is_dark_mode: false,
        expected: &[(
            "(max-width: 600px)",
            "display: grid !important;\nwidth: 50% !important;\n",
        )],
    },
];

fn native_sources() -> CategorySources<'static> {
    CategorySources {
        colors: COLORS,
        spacing: SPACING,
        font_size: FONT_SIZE,
        font_weight: FONT_WEIGHT,
        border_radius: BORDER_RADIUS,
        ..CategorySources::default()
    }
}

fn portable_sources() -> sads_portable::CategorySources<'static> {
    sads_portable::CategorySources {
        colors: COLORS,
        spacing: SPACING,
        font_size: FONT_SIZE,
        font_weight: FONT_WEIGHT,
        border_radius: BORDER_RADIUS,
        ..sads_portable::CategorySources::default()
    }
}

#[test]
fn test_value_vectors_agree_on_both_backends() {
    let native = NativeBackend::new();
    for vector in VALUE_VECTORS {
        let from_native = native
            .resolve_value(
                vector.token,
                vector.category_json,
                vector.category_name,
                vector.is_dark_mode,
            )
            .unwrap();
        let from_portable = sads_portable::resolve_value(
            vector.token,
            vector.category_json,
            vector.category_name,
            vector.is_dark_mode,
        )
        .unwrap();

        let context = format!(
            "token={:?} category={} dark={}",
            vector.token, vector.category_name, vector.is_dark_mode
        );
        assert_eq!(from_native.as_deref(), vector.expected, "native: {context}");
        assert_eq!(from_portable.as_deref(), vector.expected, "portable: {context}");
        assert_eq!(from_native, from_portable, "backends drifted: {context}");
    }
}

#[test]
fn test_rule_vectors_agree_on_both_backends() {
    let native = NativeBackend::new();
    for vector in RULE_VECTORS {
        let from_native = native
            .compile_responsive_rules(
                vector.rules_json,
                BREAKPOINTS,
                &native_sources(),
                vector.is_dark_mode,
            )
            .unwrap();
        let from_portable = sads_portable::compile_responsive_rules(
            vector.rules_json,
            BREAKPOINTS,
            &portable_sources(),
            vector.is_dark_mode,
        )
        .unwrap();

        let expected: BTreeMap<String, String> = vector
            .expected
            .iter()
            .map(|(query, block)| (query.to_string(), block.to_string()))
            .collect();
        assert_eq!(from_native, expected, "native: {}", vector.name);
        assert_eq!(from_portable, expected, "portable: {}", vector.name);
        assert_eq!(from_native, from_portable, "backends drifted: {}", vector.name);
    }
}

#[test]
fn test_both_backends_reject_the_same_malformed_inputs() {
    let native = NativeBackend::new();

    assert!(native
        .resolve_value("m", "{broken", "spacing", false)
        .is_err());
    assert!(sads_portable::resolve_value("m", "{broken", "spacing", false).is_err());

    assert!(native
        .compile_responsive_rules("[{truncated", BREAKPOINTS, &native_sources(), false)
        .is_err());
    assert!(sads_portable::compile_responsive_rules(
        "[{truncated",
        BREAKPOINTS,
        &portable_sources(),
        false
    )
    .is_err());

    assert!(native
        .compile_responsive_rules("[]", "{broken", &native_sources(), false)
        .is_err());
    assert!(
        sads_portable::compile_responsive_rules("[]", "{broken", &portable_sources(), false)
            .is_err()
    );
}
