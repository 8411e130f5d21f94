//! Matching services
//!
//! Pure logic that operates on patterns and candidate lists passed in.
//!
//! - [`compiler`] - Compile wildcard patterns into matchers
//! - [`filter`] - Filter candidate lists with a pattern
//! - [`explain`] - Test a single input and describe the pattern

pub mod compiler;
pub mod explain;
pub mod filter;

pub use compiler::{compile_glob, glob_to_regex};
pub use explain::{INVALID_EXPLANATION, explain, test_input, validate};
pub use filter::{DEFAULT_LIMIT, evaluate, filter_by_glob};
