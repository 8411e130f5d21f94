//! Validate command - report whether a pattern compiles

use globlab::compile_glob;
use globlab::output::{OutputMode, ValidationResult};

/// Validate a pattern, failing when it does not compile
pub fn validate(pattern: &str, output_mode: OutputMode) -> anyhow::Result<()> {
    let compiled = compile_glob(pattern);

    let result = ValidationResult {
        pattern: pattern.to_string(),
        valid: compiled.is_ok(),
        regex: compiled.as_ref().ok().map(|m| m.regex_str().to_string()),
        error: compiled.as_ref().err().map(ToString::to_string),
    };
    result.render(output_mode);

    compiled.map(|_| ()).map_err(|err| anyhow::anyhow!("invalid pattern '{pattern}': {err}"))
}
