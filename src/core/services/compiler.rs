//! Glob compiler - turns a wildcard pattern into an anchored regex
//!
//! Supported syntax:
//! - `*` - any run of characters, including none
//! - `?` - exactly one character
//! - `[abc]`, `[a-z]` - one character from a set or range
//! - `[!abc]`, `[^abc]` - one character not in the set
//!
//! Everything else is literal. There is no escape character.

use log::debug;
use regex::Regex;

use crate::core::models::{GlobMatcher, PatternError};

/// Compile a wildcard pattern into a matcher
///
/// # Examples
///
/// ```
/// use globlab::{PatternError, compile_glob};
///
/// let matcher = compile_glob("*.txt").unwrap();
/// assert!(matcher.matches("notes.txt"));
/// assert!(matcher.matches(".txt"));
/// assert!(!matcher.matches("notes.txtx"));
///
/// assert_eq!(compile_glob("[abc"), Err(PatternError::UnclosedClass { position: 0 }));
/// ```
pub fn compile_glob(pattern: &str) -> Result<GlobMatcher, PatternError> {
    let expr = glob_to_regex(pattern)?;
    debug!("compiled glob {pattern:?} to {expr}");
    let regex = Regex::new(&expr)?;
    Ok(GlobMatcher::new(pattern, regex))
}

/// Convert a glob pattern to regex source
///
/// The result is anchored on both ends and runs in dot-all mode so that `*`
/// and `?` match any character, newlines included.
pub fn glob_to_regex(glob: &str) -> Result<String, PatternError> {
    let mut regex = String::with_capacity(glob.len() * 2 + 6);
    regex.push_str("(?s)^");

    let chars: Vec<char> = glob.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => regex.push_str(".*"),
            '?' => regex.push('.'),
            '[' => {
                let (class, next) = parse_class(&chars, i)?;
                regex.push_str(&class);
                i = next;
                continue;
            },
            c => push_literal(&mut regex, c),
        }
        i += 1;
    }

    regex.push('$');
    Ok(regex)
}

/// Parse the bracket expression opening at `start`
///
/// Returns the regex class and the index just past the closing `]`.
fn parse_class(chars: &[char], start: usize) -> Result<(String, usize), PatternError> {
    let mut i = start + 1;

    let negated = matches!(chars.get(i), Some('!' | '^'));
    if negated {
        i += 1;
    }

    // A leading ']' is a member, not the terminator
    let body_start = i;
    if chars.get(i) == Some(&']') {
        i += 1;
    }
    while i < chars.len() && chars[i] != ']' {
        i += 1;
    }
    if i >= chars.len() {
        return Err(PatternError::UnclosedClass { position: start });
    }

    let members = &chars[body_start..i];
    let mut class = String::from(if negated { "[^" } else { "[" });

    let mut j = 0;
    while j < members.len() {
        let c = members[j];
        if j + 2 < members.len() && members[j + 1] == '-' {
            let end = members[j + 2];
            if c > end {
                return Err(PatternError::InvalidRange { start: c, end });
            }
            push_literal(&mut class, c);
            class.push('-');
            push_literal(&mut class, end);
            j += 3;
        } else {
            push_literal(&mut class, c);
            j += 1;
        }
    }

    class.push(']');
    Ok((class, i + 1))
}

fn push_literal(regex: &mut String, c: char) {
    let mut buf = [0; 4];
    regex.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}
