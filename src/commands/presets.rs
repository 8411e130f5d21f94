//! Presets command - list the example patterns or run one

use globlab::catalog::WildcardKind;
use globlab::config::GlobalConfig;
use globlab::evaluate;
use globlab::output::{FilterResult, OutputMode, PresetListResult};

/// List every preset, or run the given one against the default candidates
pub fn presets(
    kind: Option<WildcardKind>,
    config: &GlobalConfig,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    match kind {
        None => {
            let presets = WildcardKind::ALL.into_iter().map(Into::into).collect();
            PresetListResult { presets }.render(output_mode);
        },
        Some(kind) => {
            let candidates = config.default_candidates();
            let outcome = evaluate(kind.pattern(), &candidates, config.matching.limit);
            FilterResult::new(outcome, candidates.len()).render(output_mode);
        },
    }
    Ok(())
}
