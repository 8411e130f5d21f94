//! globlab - Shell wildcard playground
//!
//! This library compiles shell-style wildcard patterns (`*`, `?`, `[...]`) into
//! anchored regular expressions and filters lists of file names with them.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod catalog;
pub mod config;
pub mod core;
pub mod listing;
pub mod output;
pub mod paths;

pub use crate::core::models::{GlobMatcher, PatternError};
pub use crate::core::services::{DEFAULT_LIMIT, compile_glob, evaluate, filter_by_glob};
