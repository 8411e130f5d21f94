//! Compiled wildcard matcher
//!
//! # Examples
//!
//! ```
//! use globlab::compile_glob;
//!
//! let matcher = compile_glob("file[0-9].txt").unwrap();
//! assert!(matcher.matches("file3.txt"));
//! assert!(!matcher.matches("fileA.txt"));
//!
//! let names = ["file1.txt", "file2.txt", "file10.txt"];
//! assert_eq!(matcher.apply(&names, 8), vec!["file1.txt", "file2.txt"]);
//! ```

use regex::Regex;

/// A compiled glob pattern
///
/// Matching is always against the whole candidate string.
#[derive(Debug, Clone)]
pub struct GlobMatcher {
    /// Original pattern string
    pattern: String,

    /// Compiled regex for matching
    regex: Regex,
}

impl PartialEq for GlobMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for GlobMatcher {}

impl GlobMatcher {
    pub(crate) fn new(pattern: &str, regex: Regex) -> Self {
        Self {
            pattern: pattern.to_string(),
            regex,
        }
    }

    /// Get the original pattern string
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Get the generated regular expression
    #[must_use]
    pub fn regex_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Check if the whole candidate matches this pattern
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// Keep the candidates that match, in their original order, up to `limit`
    ///
    /// Matches past `limit` are not examined; use [`GlobMatcher::count`] when
    /// the full number is needed.
    #[must_use]
    pub fn apply<'a, S: AsRef<str>>(&self, candidates: &'a [S], limit: usize) -> Vec<&'a str> {
        candidates
            .iter()
            .map(AsRef::as_ref)
            .filter(|candidate| self.matches(candidate))
            .take(limit)
            .collect()
    }

    /// Count all matching candidates
    #[must_use]
    pub fn count<S: AsRef<str>>(&self, candidates: &[S]) -> usize {
        candidates.iter().filter(|c| self.matches(c.as_ref())).count()
    }
}

impl std::fmt::Display for GlobMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pattern)
    }
}
