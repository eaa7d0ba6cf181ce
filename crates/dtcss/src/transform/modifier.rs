//! Modifier utility matching.
//!
//! Dynamic utility values of the form `{family}-{shade}/{modifier}`
//! (e.g. `primary-500/disabled`) resolve a base color from the theme
//! table and emit a `color-mix()` background declaration. The opacity is
//! routed through `var(--opacity-{modifier})` instead of a literal
//! percentage so it can still be tuned by custom-property cascading at
//! the point of use.
//!
//! Unmatched input is the normal case for an arbitrary-value matcher, not
//! an error: anything that does not parse, or that names an unknown
//! color, simply produces no utility.

use crate::ast::Declaration;
use crate::theme::ThemeColors;

/// A parsed `{family}-{shade}/{modifier}` value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModifierValue {
    pub family: String,
    pub shade: String,
    pub modifier: String,
}

impl ModifierValue {
    /// Parses a raw utility value. The color part splits at its last
    /// hyphen so multi-word families (`light-blue-500`) keep their name
    /// intact. Returns `None` when any piece is missing.
    pub fn parse(raw: &str) -> Option<Self> {
        let (color, modifier) = raw.split_once('/')?;
        if modifier.is_empty() {
            return None;
        }
        let (family, shade) = color.rsplit_once('-')?;
        if family.is_empty() || shade.is_empty() {
            return None;
        }
        Some(Self {
            family: family.to_string(),
            shade: shade.to_string(),
            modifier: modifier.to_string(),
        })
    }
}

/// Resolves a raw modifier value against the theme table.
///
/// Returns the generated `background-color` declaration, or `None` when
/// the value does not parse or names an unknown family/shade.
pub fn resolve_modifier(raw: &str, colors: &ThemeColors) -> Option<Declaration> {
    let value = ModifierValue::parse(raw)?;
    let color = colors.resolve(&value.family, &value.shade)?;

    Some(Declaration::new(
        "background-color",
        format!(
            "color-mix(in oklab, {color} var(--opacity-{}), transparent)",
            value.modifier
        ),
    ))
}
