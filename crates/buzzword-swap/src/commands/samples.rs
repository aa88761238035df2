//! Samples command: list the built-in passages.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use buzzword_swap_core::samples::SAMPLE_TEXTS;

/// Characters of each passage shown without `--full`.
const PREVIEW_CHARS: usize = 72;

/// Arguments for the `samples` subcommand.
#[derive(Args, Debug, Default)]
pub struct SamplesArgs {
    /// Print each passage in full instead of a one-line preview
    #[arg(long)]
    pub full: bool,
}

#[derive(Serialize)]
struct SampleEntry {
    number: usize,
    text: &'static str,
}

/// List the sample passages, numbered for `check --sample N`.
#[instrument(name = "cmd_samples", skip_all, fields(full = args.full))]
pub fn cmd_samples(args: SamplesArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(count = SAMPLE_TEXTS.len(), "executing samples command");

    if global_json {
        let entries: Vec<SampleEntry> = SAMPLE_TEXTS
            .iter()
            .enumerate()
            .map(|(i, text)| SampleEntry {
                number: i + 1,
                text,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for (i, text) in SAMPLE_TEXTS.iter().enumerate() {
        let label = format!("{:>2}.", i + 1);
        if args.full {
            println!("{}", label.bold());
            println!("{}", text.trim_end());
            println!();
        } else {
            println!("{} {}", label.bold(), preview(text));
        }
    }
    Ok(())
}

/// First line-collapsed `PREVIEW_CHARS` characters, with an ellipsis when cut.
fn preview(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= PREVIEW_CHARS {
        return flat;
    }
    let cut: String = flat.chars().take(PREVIEW_CHARS).collect();
    format!("{}…", cut.trim_end())
}
