//! Component class generation.
//!
//! A fixed mapping from UI element name to the declarations that wire it
//! to its per-element custom properties (color, shape, and shadow
//! tokens). The set is static: consumers restyle elements by redefining
//! the custom properties, not by editing this table.

use phf::phf_map;

use crate::ast::{Declaration, Rule};

static COMPONENT_CLASSES: phf::Map<&'static str, &'static [(&'static str, &'static str)]> = phf_map! {
    "button" => &[
        ("background-color", "var(--button-background)"),
        ("color", "var(--button-text)"),
        ("border-radius", "var(--button-radius)"),
        ("box-shadow", "var(--button-shadow)"),
    ],
    "card" => &[
        ("background-color", "var(--card-background)"),
        ("border-color", "var(--card-border)"),
        ("border-radius", "var(--card-radius)"),
        ("box-shadow", "var(--card-shadow)"),
    ],
    "input" => &[
        ("background-color", "var(--input-background)"),
        ("color", "var(--input-text)"),
        ("border-color", "var(--input-border)"),
        ("border-radius", "var(--input-radius)"),
    ],
    "badge" => &[
        ("background-color", "var(--badge-background)"),
        ("color", "var(--badge-text)"),
        ("border-radius", "var(--badge-radius)"),
    ],
    "panel" => &[
        ("background-color", "var(--panel-background)"),
        ("border-color", "var(--panel-border)"),
        ("box-shadow", "var(--panel-shadow)"),
    ],
};

/// Emits one rule per component class, in element-name order.
pub fn generate_components() -> Vec<Rule> {
    let mut entries: Vec<(&str, &[(&str, &str)])> = COMPONENT_CLASSES
        .entries()
        .map(|(name, declarations)| (*name, *declarations))
        .collect();
    entries.sort_unstable_by_key(|(name, _)| *name);

    entries
        .into_iter()
        .map(|(name, declarations)| {
            let declarations = declarations
                .iter()
                .map(|(prop, value)| Declaration::new(*prop, *value))
                .collect();
            Rule::new(format!(".{name}"), declarations)
        })
        .collect()
}
