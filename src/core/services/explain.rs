//! Single-input testing with a plain-language explanation

use super::compile_glob;
use crate::core::models::{Explanation, TestResult};

/// Explanation given when a pattern does not compile
pub const INVALID_EXPLANATION: &str = "Invalid pattern syntax";

/// Describe which wildcard feature a pattern uses
#[must_use]
pub fn explain(pattern: &str) -> Explanation {
    Explanation::of(pattern)
}

/// Check whether a pattern compiles
#[must_use]
pub fn validate(pattern: &str) -> bool {
    compile_glob(pattern).is_ok()
}

/// Test one input against a pattern
///
/// # Examples
///
/// ```
/// use globlab::core::services::test_input;
///
/// let result = test_input("file?.txt", "file1.txt");
/// assert!(result.valid);
/// assert!(result.matches);
/// assert_eq!(result.explanation, "Matches exactly one character");
/// ```
#[must_use]
pub fn test_input(pattern: &str, input: &str) -> TestResult {
    let (valid, matches, explanation) = match compile_glob(pattern) {
        Ok(matcher) => (true, matcher.matches(input), explain(pattern).to_string()),
        Err(_) => (false, false, INVALID_EXPLANATION.to_string()),
    };

    TestResult {
        pattern: pattern.to_string(),
        input: input.to_string(),
        valid,
        matches,
        explanation,
    }
}
