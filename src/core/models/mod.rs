//! Domain models for globlab
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`GlobMatcher`] - A compiled wildcard pattern
//! - [`PatternError`] - Why a pattern could not be compiled
//! - [`MatchOutcome`] - Filter result with a validity flag
//! - [`Explanation`] - Which wildcard feature a pattern relies on

mod error;
mod explanation;
mod matcher;
mod outcome;

pub use error::PatternError;
pub use explanation::Explanation;
pub use matcher::GlobMatcher;
pub use outcome::{MatchOutcome, TestResult};
