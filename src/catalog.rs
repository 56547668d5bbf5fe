//! Style Catalog - Frozen Tables
//!
//! Per-type default styles and the named palette. Pure data; nothing here
//! is ever mutated after compilation.

use serde_json::Value;
use std::collections::BTreeMap;

pub type StyleTable = &'static [(&'static str, &'static str)];

/// Named palette colors
pub const PALETTE: StyleTable = &[
    ("background", "#ffffff"),
    ("border", "#cccccc"),
    ("text", "#333333"),
    ("primary", "#007bff"),
    ("secondary", "#6c757d"),
    ("success", "#28a745"),
    ("warning", "#ffc107"),
    ("danger", "#dc3545"),
    ("light", "#f8f9fa"),
    ("dark", "#343a40"),
];

pub const PRIMARY: &str = "#007bff";
pub const LIGHT_FOREGROUND: &str = "#ffffff";
pub const BORDER: &str = "#cccccc";
pub const SURFACE: &str = "#f8f9fa";

const COMPONENT_STYLES: &[(&str, StyleTable)] = &[
    (
        "header",
        &[
            ("backgroundColor", "#f8f9fa"),
            ("borderBottom", "2px solid #dee2e6"),
            ("padding", "16px 24px"),
            ("fontSize", "24px"),
            ("fontWeight", "bold"),
        ],
    ),
    (
        "navigation",
        &[
            ("backgroundColor", "#343a40"),
            ("color", "#ffffff"),
            ("padding", "12px 0"),
            ("fontSize", "16px"),
        ],
    ),
    (
        "button",
        &[
            ("backgroundColor", "#007bff"),
            ("color", "#ffffff"),
            ("border", "none"),
            ("borderRadius", "4px"),
            ("padding", "8px 16px"),
            ("fontSize", "14px"),
            ("cursor", "pointer"),
        ],
    ),
    (
        "input",
        &[
            ("border", "1px solid #ced4da"),
            ("borderRadius", "4px"),
            ("padding", "8px 12px"),
            ("fontSize", "14px"),
            ("backgroundColor", "#ffffff"),
        ],
    ),
    (
        "card",
        &[
            ("backgroundColor", "#ffffff"),
            ("border", "1px solid #dee2e6"),
            ("borderRadius", "8px"),
            ("padding", "16px"),
            ("boxShadow", "0 2px 4px rgba(0,0,0,0.1)"),
        ],
    ),
    (
        "sidebar",
        &[
            ("backgroundColor", "#f8f9fa"),
            ("borderRight", "1px solid #dee2e6"),
            ("padding", "16px"),
        ],
    ),
    (
        "content",
        &[("backgroundColor", "#ffffff"), ("padding", "24px")],
    ),
    (
        "footer",
        &[
            ("backgroundColor", "#f8f9fa"),
            ("borderTop", "1px solid #dee2e6"),
            ("padding", "16px 24px"),
            ("fontSize", "14px"),
            ("color", "#6c757d"),
        ],
    ),
];

pub fn palette_color(name: &str) -> Option<&'static str> {
    lookup(PALETTE, name)
}

/// Catalog default for a component type. `None` for unrecognized types.
pub fn default_style(kind: &str) -> Option<StyleTable> {
    COMPONENT_STYLES
        .iter()
        .find(|(tag, _)| *tag == kind)
        .map(|(_, table)| *table)
}

pub fn palette() -> BTreeMap<String, String> {
    PALETTE
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Catalog default for `kind`, overlaid by `properties`. Properties win.
pub fn effective_style(kind: &str, properties: &BTreeMap<String, Value>) -> BTreeMap<String, String> {
    let mut style: BTreeMap<String, String> = default_style(kind)
        .unwrap_or(&[])
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    for (name, value) in properties {
        if let Some(text) = property_text(value) {
            style.insert(name.clone(), text);
        }
    }
    style
}

/// Strings pass through; numbers and booleans use their JSON text.
/// Null and structured values carry no style.
fn property_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lookup(table: StyleTable, key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
