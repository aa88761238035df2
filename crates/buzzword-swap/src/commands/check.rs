//! Check command: swap the first buzzword and see if the passage still parses.

use std::process::ExitCode;

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use buzzword_swap_core::config::{Config, HighlightStyle};
use buzzword_swap_core::tester::{TestOutcome, TestResult};

use super::{PassageArgs, make_rng, resolve_passage};

/// Arguments for the `check` subcommand.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: PassageArgs,

    /// Minimum similarity for a substitute to qualify
    #[arg(long, value_name = "SCORE")]
    pub threshold: Option<f64>,

    /// Seed for reproducible substitute selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// How to mark the substitute in the rewritten text
    #[arg(long, value_enum)]
    pub highlight: Option<HighlightStyle>,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    sample: Option<usize>,
    original_text: &'a str,
    #[serde(flatten)]
    outcome: &'a TestOutcome,
}

/// Run the interchangeability test on one passage.
///
/// Exits non-zero when the passage contains no buzzword.
#[instrument(name = "cmd_check", skip_all, fields(file = ?args.input.file, sample = ?args.input.sample))]
pub fn cmd_check(
    args: CheckArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<ExitCode> {
    debug!(threshold = ?args.threshold, seed = ?args.seed, "executing check command");

    let mut rng = make_rng(args.seed.or(config.seed));
    let passage = resolve_passage(&args.input, max_input_bytes, &mut rng)?;

    let mut settings = config.test_settings()?;
    if let Some(threshold) = args.threshold {
        anyhow::ensure!(threshold.is_finite(), "threshold must be a finite number");
        settings.threshold = threshold;
    }
    settings.highlight = output_highlight(args.highlight, config.highlight, global_json).markers();

    let tester = config
        .tester()
        .context("failed to build the tester")?
        .with_settings(settings);

    let outcome = tester
        .run_test(&passage.text, &mut rng)
        .context("buzzword test failed")?;

    if global_json {
        let report = CheckReport {
            sample: passage.sample,
            original_text: &passage.text,
            outcome: &outcome,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if let Some(n) = passage.sample {
            println!("{}", format!("Using sample passage {n}.").dimmed());
        }
        println!();
        println!("{}", "--- Interchangeable Buzzword Test Result ---".bold());
        match outcome.result() {
            Some(result) => print_result(&passage.text, result),
            None => println!("{} No buzzword found.", "error:".red().bold()),
        }
    }

    Ok(match outcome {
        TestOutcome::Swapped(_) => ExitCode::SUCCESS,
        TestOutcome::NotFound => ExitCode::FAILURE,
    })
}

/// Terminal escapes never go into JSON; `--json` downgrades them to none.
fn output_highlight(
    flag: Option<HighlightStyle>,
    configured: HighlightStyle,
    json: bool,
) -> HighlightStyle {
    match (flag, json) {
        (Some(style), _) => style,
        (None, true) if configured == HighlightStyle::Ansi => HighlightStyle::None,
        (None, _) => configured,
    }
}

fn print_result(original_text: &str, result: &TestResult) {
    println!("original_buzzword: {}", result.original_term.cyan());
    println!("replacement_buzzword: {}", result.replacement_term.cyan());
    println!();
    println!("{}", "Original text:".bold());
    println!();
    println!("{original_text}");
    println!();
    println!("{}", "Text with substitution:".bold());
    println!();
    println!("{}", result.rewritten_text);
    println!();
    let verdict = if result.syntax_ok {
        "true".green().to_string()
    } else {
        "false".red().to_string()
    };
    println!("Syntax OK?: {verdict}");
    println!(
        "{}",
        format!(
            "replaced {} occurrence(s); similarity {:.2} ({:?}, {} of {} candidates qualified)",
            result.substitution_count,
            result.similarity,
            result.selection,
            result.qualifying_candidates,
            result.candidate_count,
        )
        .dimmed()
    );
}
