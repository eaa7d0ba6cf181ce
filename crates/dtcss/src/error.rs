//! Error types for stylesheet parsing and transformation.

use thiserror::Error;

/// Errors that can occur while parsing or transforming a stylesheet.
///
/// Everything here is fail-fast: a transform either completes or aborts
/// the whole build invocation. Unmatched modifier utilities and
/// unrecognized `--alpha()` syntax are deliberately *not* errors — they
/// degrade to "no output" and "value left untouched" respectively.
#[derive(Error, Debug)]
pub enum DtcssError {
    /// Invalid CSS syntax was encountered during parsing.
    ///
    /// The string contains details about what was unexpected and where.
    #[error("CSS syntax error: {0}")]
    InvalidSyntax(String),

    /// A `@scheme` at-rule whose parameter normalizes to the empty
    /// identifier. Treated as a configuration error rather than guessing
    /// a fallback selector.
    #[error("@scheme at-rule with an empty name")]
    EmptySchemeName,

    /// An I/O error occurred while reading a stylesheet file.
    #[error("I/O error reading stylesheet")]
    Io(#[from] std::io::Error),
}
