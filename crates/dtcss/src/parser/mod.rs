//! Stylesheet parsing.
//!
//! This module turns CSS source text into the node model in [`crate::ast`]:
//!
//! - [`parse_stylesheet`]: Main entry point for parsing a full sheet
//! - [`parse_rule`]: A plain selector rule
//! - [`parse_at_rule`]: A named directive, with or without a block body
//!
//! The parser is deliberately shallow about selectors and values: both are
//! kept as raw strings, since the transform passes only ever match on
//! at-rule names and rewrite value text. Block comments (`/* */`) are
//! stripped in a pre-pass before any combinator runs.

pub mod comments;

pub use comments::strip_comments;

use crate::DtcssError;
use crate::ast::{AtRule, AtRuleItem, Declaration, Node, Rule, StyleSheet};

use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::{map, opt},
    multi::many0,
    sequence::{delimited, preceded, tuple},
};

/// Parses a full stylesheet into a [`StyleSheet`].
///
/// Fails with [`DtcssError::InvalidSyntax`] if anything other than
/// whitespace remains after the last node.
pub fn parse_stylesheet(source: &str) -> Result<StyleSheet, DtcssError> {
    let clean = strip_comments(source);

    let (remaining, nodes) =
        many0(parse_node)(clean.as_str()).map_err(|e| DtcssError::InvalidSyntax(e.to_string()))?;

    if !remaining.trim().is_empty() {
        return Err(DtcssError::InvalidSyntax(format!(
            "Unexpected tokens at end of stylesheet: {}",
            remaining.trim()
        )));
    }

    Ok(StyleSheet::new(nodes))
}

fn parse_node(input: &str) -> IResult<&str, Node> {
    let (input, _) = multispace0(input)?;
    alt((map(parse_at_rule, Node::AtRule), map(parse_rule, Node::Rule)))(input)
}

/// Parses a plain rule (e.g., ".card { color: red; }").
pub fn parse_rule(input: &str) -> IResult<&str, Rule> {
    let (input, _) = multispace0(input)?;
    let (input, selector) = take_selector(input)?;

    let (input, declarations) = delimited(
        char('{'),
        parse_declarations,
        preceded(multispace0, char('}')),
    )(input)?;

    Ok((input, Rule::new(selector.trim(), declarations)))
}

/// Parses an at-rule, either block-bodied ("@scheme dark { ... }") or
/// bodiless ("@import 'x.css';").
pub fn parse_at_rule(input: &str) -> IResult<&str, AtRule> {
    let (input, _) = multispace0(input)?;
    let (input, _) = char('@')(input)?;
    let (input, name) = parse_ident(input)?;
    let (input, params) = take_params(input)?;

    if let Some(rest) = input.strip_prefix(';') {
        return Ok((rest, AtRule::new(name, params.trim(), vec![])));
    }

    let (input, body) = delimited(
        char('{'),
        parse_at_rule_items,
        preceded(multispace0, char('}')),
    )(input)?;

    Ok((input, AtRule::new(name, params.trim(), body)))
}

/// Parses an at-rule body: a mix of declarations and nested rules.
fn parse_at_rule_items(input: &str) -> IResult<&str, Vec<AtRuleItem>> {
    many0(alt((
        map(parse_declaration, AtRuleItem::Declaration),
        map(parse_rule, AtRuleItem::Rule),
    )))(input)
}

/// Parses multiple declarations inside a rule block.
pub fn parse_declarations(input: &str) -> IResult<&str, Vec<Declaration>> {
    many0(parse_declaration)(input)
}

fn parse_declaration(input: &str) -> IResult<&str, Declaration> {
    let (input, _) = multispace0(input)?;
    let (input, prop) = parse_ident(input)?;
    let (input, _) = tuple((multispace0, char(':'), multispace0))(input)?;
    let (input, value) = take_value(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = opt(char(';'))(input)?;

    Ok((input, Declaration::new(prop, value.trim())))
}

/// A CSS identifier: alphanumerics, dashes, and underscores. Covers both
/// property names and custom properties (`--button-background`).
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

fn fail(input: &str) -> nom::Err<nom::error::Error<&str>> {
    nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Char))
}

/// Scans selector text up to the opening brace. A selector that is empty,
/// or a block that never opens, is a parse failure.
fn take_selector(input: &str) -> IResult<&str, &str> {
    for (i, c) in input.char_indices() {
        match c {
            '{' => {
                let selector = &input[..i];
                if selector.trim().is_empty() {
                    return Err(fail(input));
                }
                return Ok((&input[i..], selector));
            }
            ';' | '}' | '@' => return Err(fail(input)),
            _ => {}
        }
    }
    Err(fail(input))
}

/// Scans at-rule parameter text up to the block opener or terminating
/// semicolon, whichever comes first.
fn take_params(input: &str) -> IResult<&str, &str> {
    for (i, c) in input.char_indices() {
        if c == '{' || c == ';' {
            return Ok((&input[i..], &input[..i]));
        }
    }
    Err(fail(input))
}

/// Scans a declaration value up to an unparenthesized `;` or `}`. An
/// unparenthesized `{` means this was a nested rule head, not a value.
fn take_value(input: &str) -> IResult<&str, &str> {
    let mut depth: i32 = 0;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            ';' | '}' if depth == 0 => {
                let value = &input[..i];
                if value.trim().is_empty() {
                    return Err(fail(input));
                }
                return Ok((&input[i..], value));
            }
            '{' if depth == 0 => return Err(fail(input)),
            _ => {}
        }
    }
    Err(fail(input))
}
