//! Design-token tables and utility class generation.
//!
//! A [`VariableTable`] maps each semantic token category (background,
//! text, icon, border, ...) to an ordered list of token names. The table
//! is an explicit configuration value passed into the generators at call
//! time, so generation is pure: the same table always yields the same
//! rules, in the same order.
//!
//! Class naming contract (stable for downstream consumers that hard-code
//! class names): `{prefix}-{token}`, where the `DEFAULT` token drops the
//! suffix entirely (`.border`, not `.border-DEFAULT`). Prefixes are
//! disjoint across categories, so merging the per-category outputs is a
//! simple union.

pub mod components;

pub use components::generate_components;

use once_cell::sync::Lazy;

use crate::ast::{Declaration, Rule};

/// Token name that maps to the bare category selector.
pub const DEFAULT_TOKEN: &str = "DEFAULT";

/// A semantic token category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Background,
    Text,
    Icon,
    Border,
    Divider,
    Ring,
    RingInset,
    Shadow,
    Layer,
    PrimitiveRing,
    PrimitiveBackground,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Background,
        Category::Text,
        Category::Icon,
        Category::Border,
        Category::Divider,
        Category::Ring,
        Category::RingInset,
        Category::Shadow,
        Category::Layer,
        Category::PrimitiveRing,
        Category::PrimitiveBackground,
    ];

    /// The class-name prefix for this category. Prefixes form disjoint
    /// namespaces across categories.
    pub fn prefix(self) -> &'static str {
        match self {
            Category::Background => "bg",
            Category::Text => "text",
            Category::Icon => "icon",
            Category::Border => "border",
            Category::Divider => "divide",
            Category::Ring => "ring",
            Category::RingInset => "inset-ring",
            Category::Shadow => "shadow",
            Category::Layer => "layer",
            Category::PrimitiveRing => "primitive-ring",
            Category::PrimitiveBackground => "primitive-bg",
        }
    }

    /// Whether the generated selector targets non-last children instead of
    /// the class itself (divide spacing semantics).
    pub fn child_scoped(self) -> bool {
        matches!(self, Category::Divider | Category::RingInset)
    }

    /// Generated class name for a token of this category.
    pub fn class_name(self, token: &str) -> String {
        if token == DEFAULT_TOKEN {
            self.prefix().to_string()
        } else {
            format!("{}-{}", self.prefix(), token)
        }
    }

    fn selector(self, token: &str) -> String {
        let class = self.class_name(token);
        if self.child_scoped() {
            format!(":where(.{class} > :not(:last-child))")
        } else {
            format!(".{class}")
        }
    }

    /// The declaration a utility of this category emits, referencing the
    /// token's custom property.
    fn declaration(self, token: &str) -> Declaration {
        // The custom property mirrors the class name: --bg-primary for
        // .bg-primary, bare --border for the DEFAULT token.
        let reference = format!("var(--{})", self.class_name(token));
        match self {
            Category::Background | Category::Layer | Category::PrimitiveBackground => {
                Declaration::new("background-color", reference)
            }
            Category::Text | Category::Icon => Declaration::new("color", reference),
            Category::Border | Category::Divider => Declaration::new("border-color", reference),
            Category::Ring | Category::PrimitiveRing => {
                Declaration::new("box-shadow", format!("0 0 0 1px {reference}"))
            }
            Category::RingInset => {
                Declaration::new("box-shadow", format!("inset 0 0 0 1px {reference}"))
            }
            Category::Shadow => Declaration::new("box-shadow", reference),
        }
    }
}

/// Ordered token lists per category. Immutable once built; passed into
/// the generators by value reference, never held as ambient state.
#[derive(Clone, Debug, Default)]
pub struct VariableTable {
    entries: Vec<(Category, Vec<String>)>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method appending the token list for one category.
    pub fn with_tokens(mut self, category: Category, tokens: &[&str]) -> Self {
        self.entries
            .push((category, tokens.iter().map(|t| t.to_string()).collect()));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.entries.iter().map(|(c, t)| (*c, t.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The token lists shipped with the design system. Callers that need a
/// different set pass their own [`VariableTable`].
pub fn builtin_table() -> &'static VariableTable {
    static TABLE: Lazy<VariableTable> = Lazy::new(|| {
        VariableTable::new()
            .with_tokens(
                Category::Background,
                &[DEFAULT_TOKEN, "subtle", "muted", "emphasis", "inverse"],
            )
            .with_tokens(
                Category::Text,
                &[
                    DEFAULT_TOKEN,
                    "muted",
                    "subtle",
                    "disabled",
                    "inverse",
                    "danger",
                    "warning",
                    "success",
                    "info",
                ],
            )
            .with_tokens(
                Category::Icon,
                &[DEFAULT_TOKEN, "muted", "disabled", "inverse"],
            )
            .with_tokens(
                Category::Border,
                &[DEFAULT_TOKEN, "muted", "emphasis", "danger"],
            )
            .with_tokens(Category::Divider, &[DEFAULT_TOKEN, "muted"])
            .with_tokens(Category::Ring, &[DEFAULT_TOKEN, "danger", "info"])
            .with_tokens(Category::RingInset, &[DEFAULT_TOKEN])
            .with_tokens(Category::Shadow, &["sm", DEFAULT_TOKEN, "md", "lg"])
            .with_tokens(Category::Layer, &["1", "2", "3"])
            .with_tokens(Category::PrimitiveRing, &[DEFAULT_TOKEN])
            .with_tokens(Category::PrimitiveBackground, &["white", "black"])
    });
    &TABLE
}

/// Emits one utility rule per (category, token) entry in the table.
///
/// Total and deterministic: same table in, same rules out, in table
/// order. Category outputs are merged by simple union; prefix
/// disjointness guarantees no selector collides with another category's.
pub fn generate_utilities(table: &VariableTable) -> Vec<Rule> {
    let mut rules = Vec::new();
    for (category, tokens) in table.iter() {
        for token in tokens {
            rules.push(Rule::new(
                category.selector(token),
                vec![category.declaration(token)],
            ));
        }
    }
    rules
}
