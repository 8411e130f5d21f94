//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use globlab::catalog::{SAMPLE_FILES, WildcardKind};
use globlab::core::services::test_input;
use globlab::evaluate;
use globlab::output::{
    FilterResult, OutputMode, PatternTestResult, PresetInfo, PresetListResult, ValidationResult,
};

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn filter_result_serialization() {
    let result = FilterResult::new(evaluate("*.csv", SAMPLE_FILES, 8), SAMPLE_FILES.len());

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"valid\":true"));
    assert!(json.contains("\"candidates_checked\":26"));
    assert!(json.contains("\"total_matches\":3"));
    assert!(json.contains("users.csv"));
    assert!(!json.contains("\"error\""));
}

#[test]
fn filter_result_invalid_pattern() {
    let result = FilterResult::new(evaluate("[abc", SAMPLE_FILES, 8), SAMPLE_FILES.len());

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"valid\":false"));
    assert!(json.contains("\"matches\":[]"));
    assert!(json.contains("unclosed character class"));
}

#[test]
fn pattern_test_result_is_flat() {
    let result = PatternTestResult::from(test_input("file?.txt", "file1.txt"));

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"pattern\":\"file?.txt\""));
    assert!(json.contains("\"input\":\"file1.txt\""));
    assert!(json.contains("\"matches\":true"));
    assert!(!json.contains("\"result\""));
}

#[test]
fn validation_result_skips_missing_fields() {
    let result = ValidationResult {
        pattern: "*.txt".to_string(),
        valid: true,
        regex: Some(r"(?s)^.*\.txt$".to_string()),
        error: None,
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"regex\""));
    assert!(!json.contains("\"error\""));
}

#[test]
fn preset_info_from_kind() {
    let info = PresetInfo::from(WildcardKind::Brackets);
    assert_eq!(info.kind, "brackets");
    assert_eq!(info.pattern, "file[0-9].txt");
    assert_eq!(info.examples.len(), 3);

    let list = PresetListResult {
        presets: WildcardKind::ALL.into_iter().map(PresetInfo::from).collect(),
    };
    let json = serde_json::to_string(&list).unwrap();
    assert!(json.contains("Combined Patterns"));
}
