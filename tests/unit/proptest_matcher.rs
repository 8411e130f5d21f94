//! Property-based tests for the matcher
//!
//! Uses proptest to verify properties that should hold for all inputs.

use globlab::{compile_glob, filter_by_glob};
use proptest::prelude::*;

proptest! {
    /// A pattern without wildcards matches exactly itself
    #[test]
    fn literal_pattern_is_equality(
        pattern in "[a-zA-Z0-9._+(){}$^|-]{0,12}",
        other in "[a-zA-Z0-9._+(){}$^|-]{0,12}"
    ) {
        let matcher = compile_glob(&pattern).unwrap();
        prop_assert!(matcher.matches(&pattern));
        prop_assert_eq!(matcher.matches(&other), pattern == other);
    }

    /// "*" matches any string
    #[test]
    fn star_matches_anything(name in "\\PC*") {
        prop_assert!(compile_glob("*").unwrap().matches(&name));
    }

    /// "*.ext" matches files with that extension
    #[test]
    fn extension_glob_matches_extension(
        name in "[a-z]{0,10}",
        ext in "[a-z]{1,5}"
    ) {
        let file = format!("{name}.{ext}");
        let pattern = format!("*.{ext}");
        prop_assert!(compile_glob(&pattern).unwrap().matches(&file));
    }

    /// One "?" per character matches names of exactly that length
    #[test]
    fn question_marks_match_length(name in "[a-z0-9]{1,10}", extra in 1usize..3) {
        let exact = "?".repeat(name.chars().count());
        prop_assert!(compile_glob(&exact).unwrap().matches(&name));

        let longer = "?".repeat(name.chars().count() + extra);
        prop_assert!(!compile_glob(&longer).unwrap().matches(&name));
    }

    /// Compiling the same pattern twice gives the same verdicts
    #[test]
    fn compile_is_deterministic(pattern in "[a-c*?]{0,6}", name in "[a-c]{0,6}") {
        let a = compile_glob(&pattern).unwrap();
        let b = compile_glob(&pattern).unwrap();
        prop_assert_eq!(a.matches(&name), b.matches(&name));
    }

    /// Filtering returns an ordered subsequence no longer than the limit
    #[test]
    fn filter_is_ordered_prefix_of_matches(
        names in prop::collection::vec("[a-c]{1,4}\\.(txt|log)", 0..20),
        limit in 0usize..10
    ) {
        let matches = filter_by_glob("*.txt", &names, limit);
        let expected: Vec<String> =
            names.iter().filter(|n| n.ends_with(".txt")).take(limit).cloned().collect();
        prop_assert_eq!(matches, expected);
    }
}
