//! Pattern compilation errors

use thiserror::Error;

/// Errors that can occur when compiling a wildcard pattern
///
/// Positions are character offsets into the original pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A `[` was never closed by a matching `]`
    #[error("unclosed character class starting at position {position}")]
    UnclosedClass {
        /// Offset of the opening `[`
        position: usize,
    },

    /// A range inside a character class runs backwards, e.g. `[z-a]`
    #[error("invalid range '{start}-{end}' in character class")]
    InvalidRange {
        /// First character of the range
        start: char,
        /// Last character of the range
        end: char,
    },

    /// The regex engine rejected the generated expression
    #[error("invalid pattern: {0}")]
    Regex(String),
}

impl From<regex::Error> for PatternError {
    fn from(err: regex::Error) -> Self {
        Self::Regex(err.to_string())
    }
}
