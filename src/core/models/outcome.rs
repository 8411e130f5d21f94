//! Results of running a pattern against candidates

use serde::{Deserialize, Serialize};

/// Result of filtering a candidate list with a pattern
///
/// An invalid pattern never fails the filter: it yields `valid == false`,
/// the compile error text and no matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// The pattern as given
    pub pattern: String,
    /// Whether the pattern compiled
    pub valid: bool,
    /// Compile error, if the pattern was invalid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Matching candidates in original order, truncated to the limit
    pub matches: Vec<String>,
    /// Number of matching candidates before truncation
    pub total_matches: usize,
}

impl MatchOutcome {
    /// Outcome for a pattern that failed to compile
    #[must_use]
    pub fn invalid(pattern: &str, error: impl Into<String>) -> Self {
        Self {
            pattern: pattern.to_string(),
            valid: false,
            error: Some(error.into()),
            matches: Vec::new(),
            total_matches: 0,
        }
    }

    /// Whether more candidates matched than were returned
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.total_matches > self.matches.len()
    }
}

/// Result of testing a single input against a pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// The pattern as given
    pub pattern: String,
    /// The tested input
    pub input: String,
    /// Whether the pattern compiled
    pub valid: bool,
    /// Whether the input matched
    pub matches: bool,
    /// Plain-language explanation of the pattern
    pub explanation: String,
}
