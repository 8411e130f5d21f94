//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::debug;

use crate::commands;
use globlab::catalog::WildcardKind;
use globlab::config::GlobalConfig;
use globlab::output::OutputMode;
use globlab::VERSION;

/// globlab - Shell wildcard playground
#[derive(Parser, Debug)]
#[command(
    name = "globlab",
    version,
    about = "Shell wildcard playground",
    long_about = "Compile shell wildcard patterns and see what they match.\n\n\
                  '*' matches any run of characters, '?' exactly one,\n\
                  '[abc]' / '[a-z]' one from a set and '[!abc]' one outside it."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of ~/.globlab/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter names with a pattern
    Filter {
        /// Wildcard pattern
        pattern: String,

        /// Candidate names (default: files under --dir, or the sample catalog)
        candidates: Vec<String>,

        /// Use the files under this directory as candidates
        #[arg(short, long, conflicts_with = "candidates")]
        dir: Option<PathBuf>,

        /// Only descend this many levels below --dir
        #[arg(long, requires = "dir")]
        depth: Option<usize>,

        /// Maximum number of matches to show
        #[arg(short, long, conflicts_with = "all")]
        limit: Option<usize>,

        /// Show every match
        #[arg(short, long)]
        all: bool,
    },

    /// Test one name against a pattern
    Test {
        /// Wildcard pattern
        pattern: String,

        /// Name to test
        input: String,
    },

    /// Check a pattern and show the regular expression it compiles to
    Validate {
        /// Wildcard pattern
        pattern: String,
    },

    /// List presets, or run one against the sample catalog
    Presets {
        /// Preset to run: asterisk, question, brackets, combined
        kind: Option<WildcardKind>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = match &cli.config {
        Some(path) => GlobalConfig::load_from(path)?,
        None => GlobalConfig::load(),
    };
    debug!("using config {config:?}");

    match cli.command {
        Some(Command::Filter {
            pattern,
            candidates,
            dir,
            depth,
            limit,
            all,
        }) => {
            let limit = if all {
                usize::MAX
            } else {
                limit.unwrap_or(config.matching.limit)
            };
            let source = commands::CandidateSource::pick(candidates, dir, depth);
            commands::filter(&pattern, source, limit, &config, output_mode)
        },
        Some(Command::Test { pattern, input }) => {
            commands::test(&pattern, &input, output_mode);
            Ok(())
        },
        Some(Command::Validate { pattern }) => commands::validate(&pattern, output_mode),
        Some(Command::Presets { kind }) => commands::presets(kind, &config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": VERSION
                    })
                );
            } else {
                println!("globlab v{VERSION}");
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("globlab v{VERSION}");
                println!("\nRun 'globlab --help' for usage");
                println!("Run 'globlab presets' to see example patterns");
            }
            Ok(())
        },
    }
}
