//! Tests for glob compilation
//!
//! A compiled matcher must accept the whole candidate or nothing.

use globlab::core::services::glob_to_regex;
use globlab::{PatternError, compile_glob};

// =============================================================================
// Wildcards
// =============================================================================

#[test]
fn literal_pattern_is_string_equality() {
    let matcher = compile_glob("notes.txt").unwrap();
    assert!(matcher.matches("notes.txt"));
    assert!(!matcher.matches("notesXtxt"));
    assert!(!matcher.matches("notes.txt.bak"));
    assert!(!matcher.matches("my-notes.txt"));
}

#[test]
fn asterisk_matches_any_run() {
    let matcher = compile_glob("*.txt").unwrap();
    assert!(matcher.matches("notes.txt"));
    assert!(matcher.matches(".txt"));
    assert!(!matcher.matches("notes.txtx"));
}

#[test]
fn question_mark_matches_one_char() {
    let matcher = compile_glob("file?.txt").unwrap();
    assert!(matcher.matches("file1.txt"));
    assert!(!matcher.matches("file10.txt"));
    assert!(!matcher.matches("file.txt"));
}

#[test]
fn digit_class_matches_one_digit() {
    let matcher = compile_glob("file[0-9].txt").unwrap();
    assert!(matcher.matches("file3.txt"));
    assert!(!matcher.matches("fileA.txt"));
    assert!(!matcher.matches("file12.txt"));
}

#[test]
fn combined_preset() {
    let matcher = compile_glob("*[0-9]?.txt").unwrap();
    assert!(matcher.matches("log10.txt"));
    assert!(matcher.matches("1a.txt"));
    assert!(!matcher.matches("file1.txt"));
}

#[test]
fn negation_with_bang() {
    let matcher = compile_glob("[!0-9]*").unwrap();
    assert!(matcher.matches("notes.txt"));
    assert!(!matcher.matches("1notes.txt"));
}

// =============================================================================
// Matcher accessors
// =============================================================================

#[test]
fn matcher_keeps_pattern_and_regex() {
    let matcher = compile_glob("*.txt").unwrap();
    assert_eq!(matcher.pattern(), "*.txt");
    assert_eq!(matcher.regex_str(), r"(?s)^.*\.txt$");
    assert_eq!(matcher.to_string(), "*.txt");
}

#[test]
fn compiling_twice_is_equivalent() {
    let a = compile_glob("[a-c]?*.log").unwrap();
    let b = compile_glob("[a-c]?*.log").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.regex_str(), b.regex_str());
    for name in ["access.log", "b1.log", "error.log", "a.log", ""] {
        assert_eq!(a.matches(name), b.matches(name), "{name:?}");
    }
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn unterminated_class_is_an_error() {
    assert_eq!(compile_glob("[abc").unwrap_err(), PatternError::UnclosedClass { position: 0 });
    assert!(glob_to_regex("data[").is_err());
}

#[test]
fn reversed_range_is_an_error() {
    let err = compile_glob("file[9-0].txt").unwrap_err();
    assert_eq!(err, PatternError::InvalidRange { start: '9', end: '0' });
    assert_eq!(err.to_string(), "invalid range '9-0' in character class");
}

#[test]
fn error_messages() {
    let err = compile_glob("ab[c").unwrap_err();
    assert_eq!(err.to_string(), "unclosed character class starting at position 2");
}
