//! Info command implementation

use buzzword_swap_core::DEFAULT_MAX_INPUT_BYTES;
use buzzword_swap_core::config::{Config, ConfigSources};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    similarity_threshold: f64,
    highlight: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    vocabulary_source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    vocabulary_size: Option<usize>,
    extra_terms: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let max_input_bytes = if config.disable_input_limit {
            None
        } else {
            Some(config.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
        };
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            similarity_threshold: config.similarity_threshold,
            highlight: config.highlight.to_string(),
            seed: config.seed,
            vocabulary_source: if config.vocabulary.is_some() {
                "config"
            } else {
                "built-in"
            },
            vocabulary_size: config.vocabulary().ok().map(|v| v.len()),
            extra_terms: config.extra_terms.as_ref().map_or(0, Vec::len),
            max_input_bytes,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let info = PackageInfo::new();

    debug!(json_output = global_json, "executing info command");

    let config_info = ConfigInfo::from_config(config, sources);
    let full_info = FullInfo {
        package: info,
        config: config_info,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
    } else {
        println!(
            "{} {}",
            full_info.package.name.bold(),
            full_info.package.version.green()
        );
        if !full_info.package.description.is_empty() {
            println!("{}", full_info.package.description);
        }
        if !full_info.package.license.is_empty() {
            println!("{}: {}", "License".dimmed(), full_info.package.license);
        }

        // Configuration section
        println!();
        println!("{}", "Configuration".bold().underline());
        if let Some(ref path) = full_info.config.config_file {
            println!("{}: {}", "Config file".dimmed(), path.cyan());
        } else {
            println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
        }
        println!("{}: {}", "Log level".dimmed(), full_info.config.log_level);
        if let Some(ref dir) = full_info.config.log_dir {
            println!("{}: {}", "Log directory".dimmed(), dir);
        }

        // Test settings
        println!();
        println!("{}", "Buzzword Test".bold().underline());
        println!(
            "{}: {:.2}",
            "Similarity threshold".dimmed(),
            full_info.config.similarity_threshold
        );
        println!("{}: {}", "Highlight".dimmed(), full_info.config.highlight);
        print_opt("Seed", &full_info.config.seed);
        match full_info.config.vocabulary_size {
            Some(size) => println!(
                "{}: {} terms ({}, +{} extra)",
                "Vocabulary".dimmed(),
                size,
                full_info.config.vocabulary_source,
                full_info.config.extra_terms
            ),
            None => println!("{}: {}", "Vocabulary".dimmed(), "invalid".red()),
        }
        match full_info.config.max_input_bytes {
            Some(max) => println!("{}: {} bytes", "Input limit".dimmed(), max),
            None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
        }
    }

    Ok(())
}

/// Print an optional numeric value or "(not set)".
fn print_opt<T: std::fmt::Display>(label: &str, value: &Option<T>) {
    match value {
        Some(v) => println!("{}: {}", label.dimmed(), v),
        None => println!("{}: {}", label.dimmed(), "(not set)".dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config::default()
    }

    fn test_sources() -> ConfigSources {
        ConfigSources::default()
    }

    #[test]
    fn test_cmd_info_text_succeeds() {
        assert!(cmd_info(InfoArgs::default(), false, &test_config(), &test_sources()).is_ok());
    }

    #[test]
    fn test_cmd_info_json_via_global() {
        assert!(cmd_info(InfoArgs::default(), true, &test_config(), &test_sources()).is_ok());
    }

    #[test]
    fn test_config_info_no_file() {
        let config = Config::default();
        let sources = ConfigSources::default();
        let info = ConfigInfo::from_config(&config, &sources);
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert_eq!(info.highlight, "ansi");
        assert_eq!(info.vocabulary_source, "built-in");
        assert_eq!(info.max_input_bytes, Some(DEFAULT_MAX_INPUT_BYTES));
    }

    #[test]
    fn test_config_info_reports_custom_vocabulary() {
        let config = Config {
            vocabulary: Some(vec!["impact".into(), "growth".into()]),
            extra_terms: Some(vec!["synergy".into()]),
            disable_input_limit: true,
            ..Config::default()
        };
        let info = ConfigInfo::from_config(&config, &ConfigSources::default());
        assert_eq!(info.vocabulary_source, "config");
        assert_eq!(info.vocabulary_size, Some(3));
        assert_eq!(info.extra_terms, 1);
        assert!(info.max_input_bytes.is_none());
    }
}
