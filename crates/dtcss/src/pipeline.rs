//! The build pipeline.
//!
//! One [`Pipeline`] value holds the per-invocation configuration (theme
//! colors and the variable table) and drives the passes in their fixed
//! order over a freshly parsed sheet:
//!
//! 1. `@scheme` rewriting (before anything that would choke on the
//!    custom at-rule),
//! 2. `--alpha()` value rewriting,
//! 3. merging in the generated utility and component classes.
//!
//! Everything is fail-fast: an error aborts the invocation and no partial
//! output is produced.

use std::fs;
use std::path::Path;

use crate::DtcssError;
use crate::ast::{Declaration, Node, StyleSheet};
use crate::parser::parse_stylesheet;
use crate::theme::ThemeColors;
use crate::tokens::{VariableTable, builtin_table, generate_components, generate_utilities};
use crate::transform::{resolve_modifier, rewrite_alpha_values, rewrite_schemes};

/// Per-invocation pipeline configuration.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    theme: ThemeColors,
    table: VariableTable,
}

impl Pipeline {
    /// Creates a pipeline with the given theme colors and the built-in
    /// variable table.
    pub fn new(theme: ThemeColors) -> Self {
        Self {
            theme,
            table: builtin_table().clone(),
        }
    }

    /// Builder method replacing the variable table.
    pub fn with_table(mut self, table: VariableTable) -> Self {
        self.table = table;
        self
    }

    /// Runs all passes over the sheet in place, then appends the
    /// generated utility and component rules.
    pub fn run(&self, sheet: &mut StyleSheet) -> Result<(), DtcssError> {
        rewrite_schemes(sheet)?;
        rewrite_alpha_values(sheet);

        let utilities = generate_utilities(&self.table);
        let components = generate_components();
        log::debug!(
            "merging {} utility and {} component rule(s)",
            utilities.len(),
            components.len()
        );
        sheet
            .nodes
            .extend(utilities.into_iter().chain(components).map(Node::Rule));

        Ok(())
    }

    /// Parses, transforms, and serializes a stylesheet in one step.
    pub fn process(&self, source: &str) -> Result<String, DtcssError> {
        let mut sheet = parse_stylesheet(source)?;
        self.run(&mut sheet)?;
        Ok(sheet.to_string())
    }

    /// [`Pipeline::process`] for a stylesheet on disk.
    pub fn process_file(&self, path: impl AsRef<Path>) -> Result<String, DtcssError> {
        let source = fs::read_to_string(path)?;
        self.process(&source)
    }

    /// Resolves a dynamic `family-shade/modifier` utility value against
    /// this pipeline's theme. `None` for anything unmatched.
    pub fn resolve_modifier(&self, raw: &str) -> Option<Declaration> {
        resolve_modifier(raw, &self.theme)
    }
}
