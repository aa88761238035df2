//! Logging setup.
//!
//! Human-readable events go to stderr. When a log directory or file is
//! configured, events are also written to a daily-rolling file through a
//! non-blocking writer; the returned guard flushes it on drop.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlockingBuilder, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Explicit log file path.
const LOG_PATH_ENV: &str = "BUZZWORD_SWAP_LOG_PATH";
/// Log directory (daily rotation).
const LOG_DIR_ENV: &str = "BUZZWORD_SWAP_LOG_DIR";
const LOG_FILE_PREFIX: &str = "buzzword-swap";
const MAX_LOG_FILES: usize = 7;

/// Where file logs go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Single log file; takes precedence over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rolling log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read `BUZZWORD_SWAP_LOG_PATH` and `BUZZWORD_SWAP_LOG_DIR`, falling back
    /// to the configured log directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(env_path(LOG_PATH_ENV), env_path(LOG_DIR_ENV), config_log_dir)
    }

    fn resolve(
        env_log_path: Option<PathBuf>,
        env_log_dir: Option<PathBuf>,
        config_log_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            log_path: env_log_path,
            log_dir: env_log_dir.or(config_log_dir),
        }
    }

    /// Directory and file name prefix for the file appender.
    fn file_target(&self) -> Option<(PathBuf, String)> {
        if let Some(path) = &self.log_path {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            let name = path
                .file_name()
                .map_or_else(|| LOG_FILE_PREFIX.to_string(), |n| n.to_string_lossy().into_owned());
            return Some((dir, name));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), LOG_FILE_PREFIX.to_string()))
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Build the global filter: `RUST_LOG` when set, otherwise derived from the
/// CLI flags and the configured level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(quiet, verbose, config_level)))
}

fn filter_directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => config_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Stderr stays at warnings unless `-v` asks for more.
const fn console_level(quiet: bool, verbose: u8) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

/// Install the global subscriber.
///
/// Returns the file writer's guard when file logging is enabled; keep it
/// alive until the process exits.
pub fn init_observability(
    cfg: &ObservabilityConfig,
    filter: EnvFilter,
    quiet: bool,
    verbose: u8,
) -> anyhow::Result<Option<WorkerGuard>> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_filter(console_level(quiet, verbose));

    let (file_layer, guard) = match cfg.file_target() {
        Some((dir, prefix)) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .max_log_files(MAX_LOG_FILES)
                .filename_prefix(prefix)
                .filename_suffix("log")
                .build(&dir)
                .with_context(|| format!("failed to open log file in {}", dir.display()))?;
            let (writer, guard) = NonBlockingBuilder::default()
                .lossy(false)
                .finish(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_dir_beats_config_dir() {
        let cfg = ObservabilityConfig::resolve(
            None,
            Some(PathBuf::from("/var/log/bz")),
            Some(PathBuf::from("/tmp/bz")),
        );
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/var/log/bz")));
    }

    #[test]
    fn config_dir_used_without_env() {
        let cfg = ObservabilityConfig::resolve(None, None, Some(PathBuf::from("/tmp/bz")));
        assert_eq!(
            cfg.file_target(),
            Some((PathBuf::from("/tmp/bz"), "buzzword-swap".to_string()))
        );
    }

    #[test]
    fn log_path_splits_into_dir_and_name() {
        let cfg = ObservabilityConfig::resolve(
            Some(PathBuf::from("/tmp/logs/run.log")),
            None,
            Some(PathBuf::from("/ignored")),
        );
        assert_eq!(
            cfg.file_target(),
            Some((PathBuf::from("/tmp/logs"), "run.log".to_string()))
        );
    }

    #[test]
    fn bare_file_name_logs_to_cwd() {
        let cfg = ObservabilityConfig::resolve(Some(PathBuf::from("run.log")), None, None);
        assert_eq!(
            cfg.file_target(),
            Some((PathBuf::from("."), "run.log".to_string()))
        );
    }

    #[test]
    fn no_file_logging_by_default() {
        assert_eq!(ObservabilityConfig::default().file_target(), None);
    }

    #[test]
    fn flags_pick_directive() {
        assert_eq!(filter_directive(true, 2, "info"), "error");
        assert_eq!(filter_directive(false, 0, "warn"), "warn");
        assert_eq!(filter_directive(false, 1, "info"), "debug");
        assert_eq!(filter_directive(false, 3, "info"), "trace");
    }

    #[test]
    fn console_is_quiet_by_default() {
        assert_eq!(console_level(false, 0), LevelFilter::WARN);
        assert_eq!(console_level(true, 0), LevelFilter::ERROR);
        assert_eq!(console_level(false, 1), LevelFilter::DEBUG);
    }
}
