//! Library interface for the `buzzword-swap` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for documentation generation and testing. The actual entry point is
//! in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations
//!
//! # Documentation Generation
//!
//! The [`command()`] function returns the clap `Command` for generating man pages
//! and shell completions via `xtask`.

pub mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {}
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                              Log filter (e.g., debug, buzzword_swap_core=trace)
    BUZZWORD_SWAP_LOG_PATH                Explicit log file path
    BUZZWORD_SWAP_LOG_DIR                 Log directory
    BUZZWORD_SWAP_SIMILARITY_THRESHOLD    Minimum similarity for a substitute
    BUZZWORD_SWAP_HIGHLIGHT               Substitute markers (ansi, brackets, none)
    BUZZWORD_SWAP_SEED                    Seed for substitute selection
";

/// Command-line interface definition for buzzword-swap.
#[derive(Parser)]
#[command(name = "buzzword-swap")]
#[command(
    about = "Swap a passage's buzzword for another and see whether anyone would notice",
    long_about = None
)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Swap the first buzzword in a passage and check the result still parses
    Check(commands::check::CheckArgs),

    /// Print the first buzzword found in a passage
    Locate(commands::locate::LocateArgs),

    /// List the vocabulary in order, marking repeated terms
    Vocab(commands::vocab::VocabArgs),

    /// List the built-in sample passages
    Samples(commands::samples::SamplesArgs),

    /// Show package information
    Info(commands::info::InfoArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        command().debug_assert();
    }

    #[test]
    fn check_parses_options() {
        let cli = Cli::try_parse_from([
            "buzzword-swap",
            "check",
            "--sample",
            "2",
            "--threshold",
            "0.4",
            "--seed",
            "9",
            "--highlight",
            "brackets",
        ])
        .unwrap();
        let Some(Commands::Check(args)) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(args.input.sample, Some(2));
        assert_eq!(args.threshold, Some(0.4));
        assert_eq!(args.seed, Some(9));
    }

    #[test]
    fn sample_conflicts_with_file() {
        let result = Cli::try_parse_from(["buzzword-swap", "check", "a.txt", "--sample", "1"]);
        assert!(result.is_err());
    }
}
