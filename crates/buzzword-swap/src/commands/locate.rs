//! Locate command: report the first buzzword without swapping it.

use std::process::ExitCode;

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use buzzword_swap_core::config::Config;
use buzzword_swap_core::locate::find_buzzword;

use super::{PassageArgs, make_rng, resolve_passage};

/// Arguments for the `locate` subcommand.
#[derive(Args, Debug, Default)]
pub struct LocateArgs {
    #[command(flatten)]
    pub input: PassageArgs,
}

#[derive(Serialize)]
struct LocateReport<'a> {
    term: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sample: Option<usize>,
}

/// Print the vocabulary term the check command would replace.
#[instrument(name = "cmd_locate", skip_all, fields(file = ?args.input.file))]
pub fn cmd_locate(
    args: LocateArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<ExitCode> {
    debug!("executing locate command");

    let vocab = config.vocabulary()?;
    let passage = resolve_passage(&args.input, max_input_bytes, &mut make_rng(config.seed))?;
    let term = find_buzzword(&passage.text, &vocab);

    if global_json {
        let report = LocateReport {
            term,
            sample: passage.sample,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match term {
            Some(term) => println!("{term}"),
            None => println!("{} No buzzword found.", "error:".red().bold()),
        }
    }

    Ok(if term.is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
