//! Plain-language description of a pattern

use serde::{Deserialize, Serialize};

/// The wildcard feature a pattern relies on most
///
/// A pattern with several features is described by the first one found in
/// the order `*`, `?`, `[...]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Explanation {
    /// Pattern contains `*`
    AnySequence,
    /// Pattern contains `?`
    SingleChar,
    /// Pattern contains a `[...]` set
    CharacterSet,
    /// Pattern has no wildcards
    Literal,
}

impl Explanation {
    /// Classify a pattern
    #[must_use]
    pub fn of(pattern: &str) -> Self {
        if pattern.contains('*') {
            Self::AnySequence
        } else if pattern.contains('?') {
            Self::SingleChar
        } else if pattern.contains('[') && pattern.contains(']') {
            Self::CharacterSet
        } else {
            Self::Literal
        }
    }

    /// Human-readable sentence
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AnySequence => "Matches any sequence of characters (including empty)",
            Self::SingleChar => "Matches exactly one character",
            Self::CharacterSet => "Matches any one character from the set",
            Self::Literal => "Literal string match",
        }
    }
}

impl std::fmt::Display for Explanation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
