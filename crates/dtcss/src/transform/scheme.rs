//! `@scheme` at-rule rewriting.
//!
//! A scheme is a named set of declarations for a color/theme variant:
//!
//! ```css
//! @scheme dark-contrast {
//!     border-color: black;
//! }
//! ```
//!
//! Every `@scheme` at-rule is fully replaced in the tree. It becomes a
//! plain rule whose selector matches both the scheme class and the
//! `data-theme` attribute, and — when the scheme name starts with `dark` —
//! an additional `:root` rule wrapped in a `prefers-color-scheme: dark`
//! media query:
//!
//! ```css
//! .dark-contrast, [data-theme='dark-contrast'] {
//!     border-color: black;
//! }
//! @media (prefers-color-scheme: dark) {
//!     :root {
//!         border-color: black;
//!     }
//! }
//! ```
//!
//! The walk is two-phase: matches are collected over an immutable pass,
//! then spliced into the node list back to front, so the rewriter never
//! mutates the sibling list it is iterating.

use crate::DtcssError;
use crate::ast::{AtRule, AtRuleItem, Declaration, Node, Rule, StyleSheet};

/// At-rule name recognized by this rewriter.
pub const SCHEME_AT_RULE: &str = "scheme";

/// Scheme identifiers with this prefix also target dark mode at `:root`.
const DARK_PREFIX: &str = "dark";

/// Replaces every top-level `@scheme` at-rule with its generated rules.
///
/// A parameter that normalizes to the empty identifier is a configuration
/// error and aborts the whole run.
pub fn rewrite_schemes(sheet: &mut StyleSheet) -> Result<(), DtcssError> {
    // Phase 1: collect replacements without touching the tree.
    let mut expansions: Vec<(usize, Vec<Node>)> = Vec::new();
    for (index, node) in sheet.nodes.iter().enumerate() {
        if let Node::AtRule(at) = node {
            if at.name == SCHEME_AT_RULE {
                expansions.push((index, expand_scheme(at)?));
            }
        }
    }

    if expansions.is_empty() {
        return Ok(());
    }
    log::debug!("rewriting {} @scheme at-rule(s)", expansions.len());

    // Phase 2: splice back to front so earlier indices stay valid.
    for (index, replacement) in expansions.into_iter().rev() {
        sheet.nodes.splice(index..=index, replacement);
    }
    Ok(())
}

fn expand_scheme(at: &AtRule) -> Result<Vec<Node>, DtcssError> {
    let id = at.normalized_params();
    if id.is_empty() {
        return Err(DtcssError::EmptySchemeName);
    }

    let declarations: Vec<Declaration> = at.declarations().cloned().collect();
    let selector = format!(".{id}, [data-theme='{id}']");

    // Base rule first; the dark media rule must follow it so the media
    // query wins the cascade at equal specificity.
    let mut nodes = vec![Node::Rule(Rule::new(selector, declarations.clone()))];

    if id.starts_with(DARK_PREFIX) {
        let root_rule = Rule::new(":root", declarations);
        nodes.push(Node::AtRule(AtRule::new(
            "media",
            "(prefers-color-scheme: dark)",
            vec![AtRuleItem::Rule(root_rule)],
        )));
    }

    Ok(nodes)
}
