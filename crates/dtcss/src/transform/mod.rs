//! Tree transform passes.
//!
//! Each pass is a synchronous, single-threaded walk over the in-memory
//! node tree. The passes never run concurrently and their order matters:
//! `@scheme` rewriting must happen before anything downstream that does
//! not understand the custom at-rule.
//!
//! - [`scheme`]: `@scheme` at-rule expansion
//! - [`alpha`]: `--alpha()` to `color-mix()` value rewriting
//! - [`modifier`]: dynamic `family-shade/modifier` utility matching

pub mod alpha;
pub mod modifier;
pub mod scheme;

pub use alpha::{rewrite_alpha, rewrite_alpha_balanced, rewrite_alpha_values};
pub use modifier::{ModifierValue, resolve_modifier};
pub use scheme::rewrite_schemes;
