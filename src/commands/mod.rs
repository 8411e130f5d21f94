//! Command implementations

mod filter;
mod presets;
mod validate;

pub use filter::{CandidateSource, filter};
pub use presets::presets;
pub use test::test;
pub use validate::validate;
