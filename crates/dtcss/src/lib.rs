//! # dtcss - Design-Token CSS Pipeline
//!
//! Build-time CSS transform pipeline for a design-token component
//! catalog. It rewrites the catalog's custom at-rules and value functions
//! into plain CSS and merges in the generated utility and component
//! classes:
//!
//! - **`@scheme` expansion**: named color-scheme blocks become
//!   class/attribute selector rules, with an extra dark-mode media rule
//!   for `dark*` schemes
//! - **`--alpha()` rewriting**: custom alpha calls become `color-mix()`
//!   expressions
//! - **Utility generation**: one class per design token, per category
//!   (`.bg-primary`, `.text-muted`, `.divide`, ...)
//! - **Component classes**: fixed element classes wired to per-element
//!   custom properties (`.button`, `.card`, ...)
//! - **Modifier matching**: dynamic `family-shade/modifier` values
//!   resolved against the theme color table
//!
//! ## Quick Start
//!
//! ```rust
//! use dtcss::{Pipeline, ThemeColors};
//!
//! let theme: ThemeColors = [("primary", "500", "#336699")].into_iter().collect();
//! let css = Pipeline::new(theme)
//!     .process("@scheme dark-contrast { border-color: black; }")
//!     .expect("valid stylesheet");
//!
//! assert!(css.contains("[data-theme='dark-contrast']"));
//! assert!(css.contains("@media (prefers-color-scheme: dark)"));
//! ```
//!
//! The whole pipeline is a synchronous, single-pass batch transform over
//! an in-memory tree: no I/O during the walk, no shared state across
//! invocations, and fail-fast errors with no partial output.
//!
//! ## Modules
//!
//! - [`ast`]: Node model (`StyleSheet`, `Rule`, `AtRule`, `Declaration`)
//! - [`parser`]: Stylesheet parsing
//! - [`transform`]: The rewrite passes
//! - [`tokens`]: Variable table and class generation
//! - [`theme`]: Theme color lookup
//! - [`pipeline`]: Fixed-order driver
//! - [`error`]: Error types

pub mod ast;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod theme;
pub mod tokens;
pub mod transform;

pub use error::DtcssError;
pub use pipeline::Pipeline;
pub use theme::ThemeColors;
