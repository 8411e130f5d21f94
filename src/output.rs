//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::catalog::WildcardKind;
use crate::core::models::{MatchOutcome, TestResult};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a filter operation
#[derive(Debug, Serialize)]
pub struct FilterResult {
    /// The pattern as given
    pub pattern: String,
    /// Whether the pattern compiled
    pub valid: bool,
    /// Compile error, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Number of candidates examined
    pub candidates_checked: usize,
    /// Number of matches before truncation
    pub total_matches: usize,
    /// Matches shown (first `limit`)
    pub matches: Vec<String>,
}

impl FilterResult {
    /// Build from a match outcome
    #[must_use]
    pub fn new(outcome: MatchOutcome, candidates_checked: usize) -> Self {
        Self {
            pattern: outcome.pattern,
            valid: outcome.valid,
            error: outcome.error,
            candidates_checked,
            total_matches: outcome.total_matches,
            matches: outcome.matches,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if !self.valid {
            println!("Invalid pattern: {}", self.pattern);
            if let Some(error) = &self.error {
                println!("  {error}");
            }
            println!("No matches.");
            return;
        }

        if self.matches.is_empty() {
            println!("No matches for '{}' in {} name(s).", self.pattern, self.candidates_checked);
            return;
        }

        if self.total_matches > self.matches.len() {
            println!(
                "Matches for '{}' (showing {} of {}):",
                self.pattern,
                self.matches.len(),
                self.total_matches
            );
        } else {
            println!("Matches for '{}' ({}):", self.pattern, self.total_matches);
        }
        for name in &self.matches {
            println!("  {name}");
        }
    }
}

/// Result of testing one input
#[derive(Debug, Serialize)]
pub struct PatternTestResult {
    /// The underlying test result
    #[serde(flatten)]
    pub result: TestResult,
}

impl From<TestResult> for PatternTestResult {
    fn from(result: TestResult) -> Self {
        Self { result }
    }
}

impl PatternTestResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let r = &self.result;
        if !r.valid {
            println!("Invalid pattern: {}", r.pattern);
        }
        let verdict = if r.matches { "MATCH" } else { "NO MATCH" };
        println!("{verdict}: '{}' against '{}'", r.input, r.pattern);
        println!("  {}", r.explanation);
    }
}

/// Result of a validate operation
#[derive(Debug, Serialize)]
pub struct ValidationResult {
    /// The pattern as given
    pub pattern: String,
    /// Whether the pattern compiled
    pub valid: bool,
    /// Generated regular expression, if valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    /// Compile error, if invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        match (&self.regex, &self.error) {
            (Some(regex), _) => {
                println!("Valid pattern: {}", self.pattern);
                println!("  regex: {regex}");
            },
            (None, error) => {
                println!("Invalid pattern: {}", self.pattern);
                if let Some(error) = error {
                    println!("  {error}");
                }
            },
        }
    }
}

/// Information about a preset
#[derive(Debug, Serialize)]
pub struct PresetInfo {
    /// Preset key (e.g. "asterisk")
    pub kind: String,
    /// Display name
    pub name: String,
    /// Default pattern
    pub pattern: String,
    /// Short description
    pub description: String,
    /// More patterns in the same style
    pub examples: Vec<String>,
}

impl From<WildcardKind> for PresetInfo {
    fn from(kind: WildcardKind) -> Self {
        Self {
            kind: kind.to_string(),
            name: kind.name().to_string(),
            pattern: kind.pattern().to_string(),
            description: kind.description().to_string(),
            examples: kind.examples().iter().map(ToString::to_string).collect(),
        }
    }
}

/// Result of a preset list operation
#[derive(Debug, Serialize)]
pub struct PresetListResult {
    /// List of presets
    pub presets: Vec<PresetInfo>,
}

impl PresetListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("Presets:\n");
        for p in &self.presets {
            println!("  [{}] {}", p.kind, p.name);
            println!("  Pattern: {}", p.pattern);
            println!("  {}", p.description);
            println!("  Examples: {}\n", p.examples.join(", "));
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
