//! Command implementations.

use std::io::{BufRead, IsTerminal};

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use buzzword_swap_core::samples::SAMPLE_TEXTS;

pub mod check;
pub mod info;
pub mod locate;
pub mod samples;
pub mod vocab;

/// Line that ends interactive input.
const END_MARKER: &str = "END";

/// Where a command's passage comes from.
#[derive(Args, Debug, Default, Clone)]
pub struct PassageArgs {
    /// File containing the passage (reads stdin when omitted)
    pub file: Option<Utf8PathBuf>,

    /// Use built-in sample passage N (see `samples`)
    #[arg(long, value_name = "N", conflicts_with = "file")]
    pub sample: Option<usize>,
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read lines until one equals `END` (any case) or input ends.
///
/// Returns `None` when the first line is blank or `END`, which asks for a
/// sample passage instead. Trailing newlines are dropped.
pub fn read_passage_lines<R: BufRead>(
    reader: R,
    max_bytes: Option<usize>,
) -> anyhow::Result<Option<String>> {
    let mut text = String::new();

    for (n, line) in reader.lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.eq_ignore_ascii_case(END_MARKER) || (n == 0 && line.is_empty()) {
            break;
        }
        text.push_str(line);
        text.push('\n');
        if let Some(max) = max_bytes
            && text.len() > max
        {
            bail!("input too large: stdin exceeds {max} bytes");
        }
    }

    let text = text.trim_end_matches('\n');
    Ok((!text.is_empty()).then(|| text.to_string()))
}

/// A passage and whether it was one of the built-in samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    /// The text to test.
    pub text: String,
    /// Set when a built-in sample was used.
    pub sample: Option<usize>,
}

/// Resolve the passage from `--sample`, a file, or stdin.
///
/// Blank stdin falls back to a sample drawn with `rng`.
pub fn resolve_passage(
    args: &PassageArgs,
    max_bytes: Option<usize>,
    rng: &mut StdRng,
) -> anyhow::Result<Passage> {
    if let Some(n) = args.sample {
        return sample_passage(n);
    }

    if let Some(path) = &args.file {
        let text = read_input_file(path, max_bytes)?;
        return Ok(Passage { text, sample: None });
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprintln!("Enter your text (type 'END' on a new line to finish) or hit Enter for a sample:");
    }
    match read_passage_lines(stdin.lock(), max_bytes)? {
        Some(text) => Ok(Passage { text, sample: None }),
        None => random_sample(rng),
    }
}

/// Sample `n`, numbered from 1.
fn sample_passage(n: usize) -> anyhow::Result<Passage> {
    let Some(text) = n.checked_sub(1).and_then(|i| SAMPLE_TEXTS.get(i)) else {
        bail!(
            "no sample {n}: choose a number from 1 to {}",
            SAMPLE_TEXTS.len()
        );
    };
    Ok(Passage {
        text: (*text).to_string(),
        sample: Some(n),
    })
}

fn random_sample(rng: &mut StdRng) -> anyhow::Result<Passage> {
    if SAMPLE_TEXTS.is_empty() {
        bail!("no sample passages available");
    }
    let index = rng.gen_range(0..SAMPLE_TEXTS.len());
    tracing::info!(sample = index + 1, "using a sample passage");
    sample_passage(index + 1)
}

/// Seeded generator when a seed is given, otherwise one seeded from entropy.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}
