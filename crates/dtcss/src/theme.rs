//! Theme color lookup.
//!
//! The surrounding build configuration supplies a table of resolved color
//! values keyed by family and shade (`primary` / `500` -> `#336699`). The
//! table is read-only for the duration of one pipeline invocation and is
//! rebuilt fresh for the next.

use std::collections::HashMap;

/// A `{family: {shade: value}}` color table.
#[derive(Debug, Clone, Default)]
pub struct ThemeColors {
    families: HashMap<String, HashMap<String, String>>,
}

impl ThemeColors {
    /// Creates an empty color table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines (or overwrites) the color value for a family/shade pair.
    pub fn define(
        &mut self,
        family: impl Into<String>,
        shade: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.families
            .entry(family.into())
            .or_default()
            .insert(shade.into(), value.into());
    }

    /// Resolves a family/shade pair to its color value, if defined.
    pub fn resolve(&self, family: &str, shade: &str) -> Option<&str> {
        self.families
            .get(family)
            .and_then(|shades| shades.get(shade))
            .map(String::as_str)
    }

    /// Number of defined families.
    pub fn family_count(&self) -> usize {
        self.families.len()
    }
}

impl<F, S, V> FromIterator<(F, S, V)> for ThemeColors
where
    F: Into<String>,
    S: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (F, S, V)>>(iter: I) -> Self {
        let mut colors = Self::new();
        for (family, shade, value) in iter {
            colors.define(family, shade, value);
        }
        colors
    }
}
