//! Filter command - run a pattern over a candidate list

use std::path::PathBuf;

use globlab::config::GlobalConfig;
use globlab::evaluate;
use globlab::listing::DirLister;
use globlab::output::{FilterResult, OutputMode};

/// Where filter candidates come from
#[derive(Debug)]
pub enum CandidateSource {
    /// Names given on the command line
    Explicit(Vec<String>),
    /// Files under a directory
    Directory {
        /// Root to list
        root: PathBuf,
        /// Maximum depth below the root
        depth: Option<usize>,
    },
    /// The configured catalog, or the built-in samples
    Catalog,
}

impl CandidateSource {
    /// Choose a source from CLI arguments
    pub fn pick(candidates: Vec<String>, dir: Option<PathBuf>, depth: Option<usize>) -> Self {
        if !candidates.is_empty() {
            Self::Explicit(candidates)
        } else if let Some(root) = dir {
            Self::Directory { root, depth }
        } else {
            Self::Catalog
        }
    }

    fn load(self, config: &GlobalConfig) -> anyhow::Result<Vec<String>> {
        match self {
            Self::Explicit(names) => Ok(names),
            Self::Directory { root, depth } => {
                let mut lister = DirLister::new(&root)?;
                if let Some(depth) = depth {
                    lister = lister.with_max_depth(depth);
                }
                Ok(lister.list()?)
            },
            Self::Catalog => Ok(config.default_candidates()),
        }
    }
}

/// Filter candidates by a pattern and print the matches
pub fn filter(
    pattern: &str,
    source: CandidateSource,
    limit: usize,
    config: &GlobalConfig,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let candidates = source.load(config)?;
    let outcome = evaluate(pattern, &candidates, limit);
    FilterResult::new(outcome, candidates.len()).render(output_mode);
    Ok(())
}
