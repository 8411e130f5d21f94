//! Built-in sample files and wildcard presets
//!
//! The sample list is the default candidate set when none is given.

use serde::{Deserialize, Serialize};

/// Sample file names used when no candidates are supplied
pub const SAMPLE_FILES: &[&str] = &[
    "notes.txt",
    "report.txt",
    "document.txt",
    "data.txt",
    "image.jpg",
    "photo.jpg",
    "picture.png",
    "graphic.gif",
    "data.csv",
    "users.csv",
    "products.csv",
    "file1.doc",
    "file2.doc",
    "file3.doc",
    "archive.tar.gz",
    "backup.tar.gz",
    "config.yml",
    "settings.json",
    "script.sh",
    "program.py",
    "app.js",
    "readme.md",
    "license.txt",
    "temp.log",
    "error.log",
    "access.log",
];

/// A named family of example patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WildcardKind {
    /// `*` - any sequence of characters
    #[default]
    Asterisk,
    /// `?` - exactly one character
    Question,
    /// `[...]` - one character from a set
    Brackets,
    /// Several wildcards mixed together
    Combined,
}

impl WildcardKind {
    /// All presets in display order
    pub const ALL: [Self; 4] = [Self::Asterisk, Self::Question, Self::Brackets, Self::Combined];

    /// The pattern selected when this preset is picked
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Asterisk => "*.txt",
            Self::Question => "file?.txt",
            Self::Brackets => "file[0-9].txt",
            Self::Combined => "*[0-9]?.txt",
        }
    }

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Asterisk => "Asterisk (*)",
            Self::Question => "Question Mark (?)",
            Self::Brackets => "Square Brackets ([])",
            Self::Combined => "Combined Patterns",
        }
    }

    /// Short description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Asterisk => "Matches any sequence of characters",
            Self::Question => "Matches exactly one character",
            Self::Brackets => "Matches any one character from set",
            Self::Combined => "Mix wildcards for complex matching",
        }
    }

    /// More patterns in the same style
    #[must_use]
    pub const fn examples(self) -> &'static [&'static str] {
        match self {
            Self::Asterisk => &["*.txt", "report*", "*data*", "*.{jpg,png}"],
            Self::Question => &["file?.txt", "image-??.jpg", "doc_?.pdf"],
            Self::Brackets => &["file[0-9].txt", "[abc]*.txt", "image-[A-Z].jpg"],
            Self::Combined => &["*[0-9]?.txt", "file_*[a-z].???", "[A-Z]*[0-9]*"],
        }
    }
}

impl std::fmt::Display for WildcardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asterisk => write!(f, "asterisk"),
            Self::Question => write!(f, "question"),
            Self::Brackets => write!(f, "brackets"),
            Self::Combined => write!(f, "combined"),
        }
    }
}

impl std::str::FromStr for WildcardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asterisk" => Ok(Self::Asterisk),
            "question" => Ok(Self::Question),
            "brackets" => Ok(Self::Brackets),
            "combined" => Ok(Self::Combined),
            _ => Err(format!("Invalid preset: {s}. Use: asterisk, question, brackets, combined")),
        }
    }
}
