//! Filter service - applies a pattern to a candidate list
//!
//! Invalid patterns never fail here: they degrade to "matches nothing".

use log::{debug, warn};

use super::compile_glob;
use crate::core::models::MatchOutcome;

/// Number of matches shown by default
pub const DEFAULT_LIMIT: usize = 8;

/// Filter candidates by a wildcard pattern
///
/// Returns at most `limit` matching candidates in their original order.
/// An invalid pattern yields an empty list.
///
/// # Examples
///
/// ```
/// use globlab::filter_by_glob;
///
/// let names = ["notes.txt", "report.txt", "image.jpg"];
/// assert_eq!(filter_by_glob("*.txt", &names, 8), vec!["notes.txt", "report.txt"]);
/// assert!(filter_by_glob("[abc", &names, 8).is_empty());
/// ```
#[must_use]
pub fn filter_by_glob<S: AsRef<str>>(pattern: &str, candidates: &[S], limit: usize) -> Vec<String> {
    match compile_glob(pattern) {
        Ok(matcher) => matcher.apply(candidates, limit).into_iter().map(String::from).collect(),
        Err(err) => {
            warn!("treating invalid pattern {pattern:?} as matching nothing: {err}");
            Vec::new()
        },
    }
}

/// Filter candidates and report validity and the untruncated match count
#[must_use]
pub fn evaluate<S: AsRef<str>>(pattern: &str, candidates: &[S], limit: usize) -> MatchOutcome {
    let matcher = match compile_glob(pattern) {
        Ok(matcher) => matcher,
        Err(err) => {
            warn!("treating invalid pattern {pattern:?} as matching nothing: {err}");
            return MatchOutcome::invalid(pattern, err.to_string());
        },
    };

    let mut total_matches = 0;
    let mut matches = Vec::new();
    for candidate in candidates.iter().map(AsRef::as_ref) {
        if !matcher.matches(candidate) {
            continue;
        }
        total_matches += 1;
        if matches.len() < limit {
            matches.push(candidate.to_string());
        }
    }
    debug!(
        "pattern {pattern:?}: {} of {} candidate(s) matched, returning {}",
        total_matches,
        candidates.len(),
        matches.len()
    );

    MatchOutcome {
        pattern: pattern.to_string(),
        valid: true,
        error: None,
        matches,
        total_matches,
    }
}
