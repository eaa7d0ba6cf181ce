//! Node model for parsed stylesheets.
//!
//! This is the standard three-kind model the transform passes operate on:
//!
//! - [`Rule`]: a selector plus declarations (`.card { color: red; }`)
//! - [`AtRule`]: a named directive with a raw parameter string and a body
//!   that may hold declarations, nested rules, or both (`@scheme`, `@media`)
//! - [`Declaration`]: a single `property: value` pair
//!
//! A [`StyleSheet`] owns an ordered sequence of top-level nodes. It exists
//! only for the duration of one build invocation: parsed, mutated in place
//! by the pipeline, serialized back to text, and dropped.

use std::fmt;

/// A single `property: value` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub prop: String,
    pub value: String,
}

impl Declaration {
    pub fn new(prop: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            prop: prop.into(),
            value: value.into(),
        }
    }
}

/// A plain selector rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    pub fn new(selector: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            selector: selector.into(),
            declarations,
        }
    }
}

/// Body item of an at-rule: `@scheme` bodies hold declarations, the
/// generated `@media` wrapper holds rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AtRuleItem {
    Declaration(Declaration),
    Rule(Rule),
}

/// A named directive (`@scheme dark-contrast { ... }`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AtRule {
    pub name: String,
    /// Raw parameter text as written in the source, unnormalized.
    pub params: String,
    pub body: Vec<AtRuleItem>,
}

impl AtRule {
    pub fn new(name: impl Into<String>, params: impl Into<String>, body: Vec<AtRuleItem>) -> Self {
        Self {
            name: name.into(),
            params: params.into(),
            body,
        }
    }

    /// Normalizes the raw parameter string into an identifier: trims,
    /// lowercases, replaces runs of whitespace with a single hyphen, and
    /// collapses repeated hyphens. Idempotent.
    pub fn normalized_params(&self) -> String {
        let joined = self
            .params
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");

        let mut out = String::with_capacity(joined.len());
        let mut prev_hyphen = false;
        for c in joined.chars() {
            if c == '-' {
                if !prev_hyphen {
                    out.push(c);
                }
                prev_hyphen = true;
            } else {
                out.push(c);
                prev_hyphen = false;
            }
        }
        out
    }

    /// The declarations in this at-rule's body, skipping nested rules.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.body.iter().filter_map(|item| match item {
            AtRuleItem::Declaration(d) => Some(d),
            AtRuleItem::Rule(_) => None,
        })
    }
}

/// A top-level stylesheet node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Rule(Rule),
    AtRule(AtRule),
}

/// An ordered sequence of top-level nodes. Root of a transform invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSheet {
    pub nodes: Vec<Node>,
}

impl StyleSheet {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// All top-level rules, in order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Rule(r) => Some(r),
            Node::AtRule(_) => None,
        })
    }

    /// All top-level at-rules, in order.
    pub fn at_rules(&self) -> impl Iterator<Item = &AtRule> {
        self.nodes.iter().filter_map(|n| match n {
            Node::AtRule(a) => Some(a),
            Node::Rule(_) => None,
        })
    }
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

const INDENT: &str = "    ";

fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    Ok(())
}

impl Declaration {
    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write_indent(f, depth)?;
        writeln!(f, "{}: {};", self.prop, self.value)
    }
}

impl Rule {
    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write_indent(f, depth)?;
        writeln!(f, "{} {{", self.selector)?;
        for decl in &self.declarations {
            decl.fmt_indented(f, depth + 1)?;
        }
        write_indent(f, depth)?;
        writeln!(f, "}}")
    }
}

impl AtRule {
    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write_indent(f, depth)?;
        write!(f, "@{}", self.name)?;
        if !self.params.is_empty() {
            write!(f, " {}", self.params)?;
        }
        if self.body.is_empty() {
            return writeln!(f, ";");
        }
        writeln!(f, " {{")?;
        for item in &self.body {
            match item {
                AtRuleItem::Declaration(d) => d.fmt_indented(f, depth + 1)?,
                AtRuleItem::Rule(r) => r.fmt_indented(f, depth + 1)?,
            }
        }
        write_indent(f, depth)?;
        writeln!(f, "}}")
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.prop, self.value)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

impl fmt::Display for AtRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match node {
                Node::Rule(r) => r.fmt_indented(f, 0)?,
                Node::AtRule(a) => a.fmt_indented(f, 0)?,
            }
        }
        Ok(())
    }
}
