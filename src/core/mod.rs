//! Core domain logic for globlab
//!
//! This module contains pure matching logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`GlobMatcher`, `PatternError`, `MatchOutcome`)
//! - `services/` - Compilation, filtering and explanation

pub mod models;
pub mod services;
