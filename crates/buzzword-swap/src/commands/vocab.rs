//! Vocab command: list the effective vocabulary.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use buzzword_swap_core::config::Config;
use buzzword_swap_core::vocabulary::{DuplicateTerm, Vocabulary};

/// Arguments for the `vocab` subcommand.
#[derive(Args, Debug, Default)]
pub struct VocabArgs {
    /// Only list terms that appear more than once
    #[arg(long)]
    pub duplicates: bool,
}

#[derive(Serialize)]
struct VocabReport<'a> {
    count: usize,
    terms: &'a [String],
    duplicates: Vec<DuplicateTerm>,
}

/// List vocabulary terms in order, marking repeats.
///
/// Repeated terms are drawn more often as substitutes, one slot per entry.
#[instrument(name = "cmd_vocab", skip_all, fields(duplicates_only = args.duplicates))]
pub fn cmd_vocab(args: VocabArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!("executing vocab command");

    let vocab = config.vocabulary()?;
    let duplicates = vocab.duplicates();

    if global_json {
        let report = VocabReport {
            count: vocab.len(),
            terms: if args.duplicates {
                &vocab.terms()[..0]
            } else {
                vocab.terms()
            },
            duplicates,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if args.duplicates {
        print_duplicates(&duplicates);
    } else {
        print_terms(&vocab, &duplicates);
    }
    Ok(())
}

fn print_terms(vocab: &Vocabulary, duplicates: &[DuplicateTerm]) {
    for (idx, term) in vocab.iter().enumerate() {
        let first = duplicates
            .iter()
            .find(|d| d.term == term)
            .and_then(|d| d.positions.first().copied());
        match first {
            Some(first) if first != idx => println!(
                "{:>3}  {}  {}",
                idx + 1,
                term,
                format!("(repeat of #{})", first + 1).yellow()
            ),
            _ => println!("{:>3}  {}", idx + 1, term),
        }
    }
    println!();
    println!(
        "{} terms, {} repeated",
        vocab.len(),
        duplicates.len()
    );
}

fn print_duplicates(duplicates: &[DuplicateTerm]) {
    if duplicates.is_empty() {
        println!("{}", "No repeated terms.".green());
        return;
    }
    for dup in duplicates {
        let positions: Vec<String> = dup.positions.iter().map(|p| format!("#{}", p + 1)).collect();
        println!("{}: {}", dup.term.yellow(), positions.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_list_prints() {
        assert!(cmd_vocab(VocabArgs::default(), false, &Config::default()).is_ok());
        assert!(cmd_vocab(VocabArgs { duplicates: true }, true, &Config::default()).is_ok());
    }

    #[test]
    fn empty_vocabulary_is_an_error() {
        let config = Config {
            vocabulary: Some(Vec::new()),
            ..Config::default()
        };
        assert!(cmd_vocab(VocabArgs::default(), false, &config).is_err());
    }
}
