//! Configuration loading and discovery.
//!
//! This module provides configuration file discovery by:
//! 1. Walking up from the current directory to find project config
//! 2. Loading user config from XDG config directory
//! 3. Merging with sensible defaults
//!
//! # Supported formats
//!
//! - TOML (`.toml`)
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//!
//! # Config file locations (in order of precedence, highest first):
//! - `buzzword-swap.<ext>` in current directory or any parent
//! - `.buzzword-swap.<ext>` in current directory or any parent
//! - `buzzwords.<ext>` in current directory or any parent
//! - `.buzzwords.<ext>` in current directory or any parent
//! - `~/.config/buzzword-swap/config.<ext>` (user config)
//!
//! Where `<ext>` is one of: `toml`, `yaml`, `yml`, `json`
//!
//! When multiple files exist in the same directory, all are merged via figment.
//! Later extensions override earlier: toml < yaml < yml < json.
//! `BUZZWORD_SWAP_*` environment variables override every file.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use buzzword_swap_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! let tester = config.tester().unwrap();
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::oracle::{HeuristicParser, NgramSimilarity};
use crate::rewrite::Highlight;
use crate::select::DEFAULT_SIMILARITY_THRESHOLD;
use crate::tester::{TestSettings, Tester};
use crate::vocabulary::Vocabulary;

/// How inserted substitutes are marked in the rewritten text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum HighlightStyle {
    /// Bright yellow terminal escapes.
    #[default]
    Ansi,
    /// Plain `[[...]]` brackets.
    Brackets,
    /// No markers.
    None,
}

impl HighlightStyle {
    /// Returns the style name as used in config files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ansi => "ansi",
            Self::Brackets => "brackets",
            Self::None => "none",
        }
    }

    /// The markers for this style, or `None` when highlighting is off.
    pub fn markers(self) -> Option<Highlight> {
        match self {
            Self::Ansi => Some(Highlight::ansi()),
            Self::Brackets => Some(Highlight::brackets()),
            Self::None => None,
        }
    }
}

impl std::fmt::Display for HighlightStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The configuration for buzzword-swap.
///
/// Deserialized from config files found during discovery (TOML, YAML, or JSON).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for daily-rolling plain-text log files (file logging is off if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Minimum similarity for a substitute to qualify (default: 0.25).
    pub similarity_threshold: f64,
    /// How substitutes are marked in the rewritten text.
    pub highlight: HighlightStyle,
    /// Seed for substitute selection. Omit for a fresh random pick each run.
    pub seed: Option<u64>,
    /// Replacement vocabulary. Omit to use the built-in list.
    ///
    /// Order matters: earlier terms win when several occur in a passage.
    pub vocabulary: Option<Vec<String>>,
    /// Terms appended after the base vocabulary.
    pub extra_terms: Option<Vec<String>>,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Use `disable_input_limit` to remove the limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    ///
    /// When `true`, `max_input_bytes` is ignored and no size check is performed.
    pub disable_input_limit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_dir: None,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            highlight: HighlightStyle::default(),
            seed: None,
            vocabulary: None,
            extra_terms: None,
            max_input_bytes: None,
            disable_input_limit: false,
        }
    }
}

impl Config {
    /// The effective vocabulary: `vocabulary` (or the built-in list) followed by `extra_terms`.
    pub fn vocabulary(&self) -> ConfigResult<Vocabulary> {
        let base = match &self.vocabulary {
            Some(terms) => Vocabulary::new(terms.iter().cloned())?,
            None => Vocabulary::builtin(),
        };
        match &self.extra_terms {
            Some(extra) if !extra.is_empty() => Ok(base.extended(extra.iter().cloned())?),
            _ => Ok(base),
        }
    }

    /// The similarity threshold, rejecting NaN and infinities.
    pub fn threshold(&self) -> ConfigResult<f64> {
        if self.similarity_threshold.is_finite() {
            Ok(self.similarity_threshold)
        } else {
            Err(ConfigError::InvalidThreshold(self.similarity_threshold))
        }
    }

    /// Test settings derived from this configuration.
    pub fn test_settings(&self) -> ConfigResult<TestSettings> {
        Ok(TestSettings {
            threshold: self.threshold()?,
            highlight: self.highlight.markers(),
        })
    }

    /// A tester with the built-in oracles, configured from this configuration.
    pub fn tester(&self) -> ConfigResult<Tester<NgramSimilarity, HeuristicParser>> {
        Ok(Tester::builtin(self.vocabulary()?).with_settings(self.test_settings()?))
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "buzzword-swap";

/// Application names to search for config files (in precedence order, lowest first).
const APP_NAMES: &[&str] = &["buzzwords", "buzzword-swap"];

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include user config from XDG directory.
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load (for testing or programmatic use).
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    ///
    /// The loader will walk up from this directory looking for config files.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/buzzword-swap/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Set a boundary marker to stop directory traversal.
    ///
    /// When walking up directories, stop if we find a directory containing
    /// this file or directory name. Default is `.git`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Disable boundary marker (search all the way to filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file to load.
    ///
    /// Files are loaded in order, with later files taking precedence.
    /// Explicit files are loaded after discovered files.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Returns the merged config alongside metadata about which files
    /// were loaded. Pass the [`ConfigSources`] to commands instead of
    /// having them re-discover config files.
    ///
    /// Precedence (highest to lowest):
    /// 1. Explicit files (in order added via `with_file`)
    /// 2. Project config (closest to search root)
    /// 3. User config (`~/.config/buzzword-swap/config.<ext>`)
    /// 4. Default values
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        // Start with user config (lowest precedence of file sources)
        if self.include_user_config
            && let Some(user_config) = self.find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        // Add project configs (ordered low→high precedence)
        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        // Add explicit files
        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // Environment variables (highest precedence)
        // BUZZWORD_SWAP_SIMILARITY_THRESHOLD=0.4, BUZZWORD_SWAP_LOG_LEVEL=debug, etc.
        figment = figment.merge(Env::prefixed("BUZZWORD_SWAP_").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        config.threshold()?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            similarity_threshold = config.similarity_threshold,
            highlight = config.highlight.as_str(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Find project config files by walking up from the given directory.
    ///
    /// Returns all matching config files from the closest directory that has any
    /// match, ordered low-to-high precedence: `buzzwords` names before `buzzword-swap`
    /// names, dotfiles before regular files within each app name.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();

            // Search order (low→high precedence, figment merges last-wins):
            //   1. .buzzwords.{toml,yaml,yml,json}
            //   2. buzzwords.{toml,yaml,yml,json}
            //   3. .buzzword-swap.{toml,yaml,yml,json}
            //   4. buzzword-swap.{toml,yaml,yml,json}
            for app_name in APP_NAMES {
                // Dotfiles first (lower precedence within same app name)
                for ext in CONFIG_EXTENSIONS {
                    let dotfile = dir.join(format!(".{app_name}.{ext}"));
                    if dotfile.is_file() {
                        found.push(dotfile);
                    }
                }
                // Regular files (higher precedence within same app name)
                for ext in CONFIG_EXTENSIONS {
                    let regular = dir.join(format!("{app_name}.{ext}"));
                    if regular.is_file() {
                        found.push(regular);
                    }
                }
            }

            if !found.is_empty() {
                return found;
            }

            // Check for boundary marker AFTER checking config files,
            // so a config in the same directory as the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    /// Find user config in XDG config directory.
    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
        let config_dir = proj_dirs.config_dir();

        // Try each supported extension
        for ext in CONFIG_EXTENSIONS {
            let config_path = config_dir.join(format!("config.{ext}"));
            if config_path.is_file() {
                return Utf8PathBuf::from_path_buf(config_path).ok();
            }
        }

        None
    }

    /// Merge a config file into the figment, detecting format from extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("toml") => figment.merge(Toml::file_exact(path.as_str())),
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

/// Get the project directories for XDG-compliant path resolution.
///
/// Returns `None` if the home directory cannot be determined.
fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Get the user config directory path.
///
/// Returns `~/.config/buzzword-swap/` on Linux, `~/Library/Application Support/buzzword-swap/`
/// on macOS, and equivalent on other platforms.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serializes tests that mutate environment variables via `set_var`/`remove_var`.
    static TEST_ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn load_file(contents: &str, name: &str) -> ConfigResult<Config> {
        let _lock = env_lock();
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(name);
        fs::write(&path, contents).unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();
        ConfigLoader::new()
            .with_user_config(false)
            .with_file(&path)
            .load()
            .map(|(config, _)| config)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.log_dir.is_none());
        assert_eq!(config.similarity_threshold, 0.25);
        assert_eq!(config.highlight, HighlightStyle::Ansi);
        assert!(config.seed.is_none());
        assert!(!config.disable_input_limit);
    }

    #[test]
    fn test_loader_builds_with_defaults() {
        let _lock = env_lock();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load()
            .unwrap();
        assert_eq!(config, Config::default());
        assert!(sources.primary_file().is_none());
    }

    #[test]
    fn toml_sets_every_key() {
        let config = load_file(
            r#"log_level = "debug"
log_dir = "/tmp/buzzword-swap"
similarity_threshold = 0.4
highlight = "brackets"
seed = 42
vocabulary = ["impact", "growth"]
extra_terms = ["synergy"]
max_input_bytes = 1024
"#,
            "config.toml",
        )
        .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(
            config.log_dir.as_ref().map(|dir| dir.as_str()),
            Some("/tmp/buzzword-swap")
        );
        assert_eq!(config.similarity_threshold, 0.4);
        assert_eq!(config.highlight, HighlightStyle::Brackets);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_input_bytes, Some(1024));
        let vocab = config.vocabulary().unwrap();
        assert_eq!(vocab.terms(), ["impact", "growth", "synergy"]);
    }

    #[test]
    fn yaml_and_json_are_supported() {
        let yaml = load_file("highlight: none\nseed: 7\n", "config.yaml").unwrap();
        assert_eq!(yaml.highlight, HighlightStyle::None);
        assert_eq!(yaml.seed, Some(7));

        let json = load_file(r#"{"similarity_threshold": 0.1}"#, "config.json").unwrap();
        assert_eq!(json.similarity_threshold, 0.1);
    }

    #[test]
    fn test_later_file_overrides_earlier() {
        let _lock = env_lock();
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("base.toml");
        fs::write(&base, "similarity_threshold = 0.3\nseed = 1\n").unwrap();
        let over = tmp.path().join("override.toml");
        fs::write(&over, "similarity_threshold = 0.6\n").unwrap();
        let base = Utf8PathBuf::try_from(base).unwrap();
        let over = Utf8PathBuf::try_from(over).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&base)
            .with_file(&over)
            .load()
            .unwrap();

        assert_eq!(config.similarity_threshold, 0.6);
        assert_eq!(config.seed, Some(1));
        assert_eq!(sources.primary_file(), Some(over.as_path()));
    }

    #[test]
    fn test_project_config_discovery() {
        let _lock = env_lock();
        let tmp = TempDir::new().unwrap();
        let project_dir = tmp.path().join("project");
        let sub_dir = project_dir.join("src").join("deep");
        fs::create_dir_all(&sub_dir).unwrap();
        fs::write(project_dir.join(".buzzword-swap.toml"), "seed = 99\n").unwrap();
        let sub_dir = Utf8PathBuf::try_from(sub_dir).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&sub_dir)
            .load()
            .unwrap();

        assert_eq!(config.seed, Some(99));
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn test_boundary_marker_stops_search() {
        let _lock = env_lock();
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        let work = child.join("work");
        fs::create_dir_all(&work).unwrap();
        fs::write(parent.join(".buzzwords.toml"), "seed = 5\n").unwrap();
        fs::create_dir(child.join(".git")).unwrap();
        let work = Utf8PathBuf::try_from(work).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_boundary_marker(".git")
            .with_project_search(&work)
            .load()
            .unwrap();

        assert!(config.seed.is_none());
        assert!(sources.project_files.is_empty());
    }

    #[test]
    fn buzzword_swap_names_override_buzzwords_names() {
        let _lock = env_lock();
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(".buzzwords.toml"),
            "highlight = \"none\"\nseed = 3\n",
        )
        .unwrap();
        fs::write(tmp.path().join("buzzword-swap.yaml"), "highlight: brackets\n").unwrap();
        let tmp_path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&tmp_path)
            .load()
            .unwrap();

        assert_eq!(config.highlight, HighlightStyle::Brackets);
        assert_eq!(config.seed, Some(3));
        assert_eq!(sources.project_files.len(), 2);
    }

    #[test]
    fn only_closest_directory_contributes() {
        let _lock = env_lock();
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        fs::create_dir_all(&child).unwrap();
        fs::write(parent.join("buzzwords.toml"), "seed = 1\n").unwrap();
        fs::write(child.join(".buzzword-swap.toml"), "similarity_threshold = 0.5\n").unwrap();
        let child = Utf8PathBuf::try_from(child).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&child)
            .load()
            .unwrap();

        assert_eq!(config.similarity_threshold, 0.5);
        assert!(config.seed.is_none());
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn config_deserializes_from_yaml() {
        let yaml = r#"
similarity_threshold: 0.35
highlight: brackets
vocabulary:
  - impact
  - excellence
  - impact
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.similarity_threshold, 0.35);
        assert_eq!(config.highlight, HighlightStyle::Brackets);
        assert_eq!(config.log_level, LogLevel::Info);
        let vocab = config.vocabulary().unwrap();
        assert_eq!(vocab.duplicates().len(), 1);
    }

    #[test]
    fn empty_vocabulary_is_rejected() {
        let config = load_file("vocabulary = []\n", "config.toml").unwrap();
        assert!(matches!(
            config.vocabulary(),
            Err(ConfigError::Vocabulary(_))
        ));
        assert!(matches!(config.tester(), Err(ConfigError::Vocabulary(_))));
    }

    #[test]
    fn extra_terms_extend_builtin_list() {
        let config = load_file("extra_terms = [\"paradigm shift\"]\n", "config.toml").unwrap();
        let vocab = config.vocabulary().unwrap();
        assert_eq!(vocab.len(), Vocabulary::builtin().len() + 1);
        assert_eq!(vocab.iter().last(), Some("paradigm shift"));
    }

    #[test]
    fn non_finite_threshold_is_rejected() {
        let config = Config {
            similarity_threshold: f64::NAN,
            ..Config::default()
        };
        assert!(matches!(
            config.threshold(),
            Err(ConfigError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn unknown_highlight_fails_to_load() {
        let err = load_file("highlight = \"blink\"\n", "config.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Deserialize(_)));
    }

    #[test]
    fn highlight_styles_map_to_markers() {
        assert_eq!(HighlightStyle::Ansi.markers(), Some(Highlight::ansi()));
        assert_eq!(HighlightStyle::Brackets.markers(), Some(Highlight::brackets()));
        assert_eq!(HighlightStyle::None.markers(), None);
        assert_eq!(HighlightStyle::Brackets.to_string(), "brackets");
    }

    #[test]
    fn test_settings_follow_config() {
        let config = Config {
            similarity_threshold: 0.7,
            highlight: HighlightStyle::None,
            ..Config::default()
        };
        let settings = config.test_settings().unwrap();
        assert_eq!(settings.threshold, 0.7);
        assert!(settings.highlight.is_none());
    }

    #[test]
    fn test_user_config_dir() {
        if let Some(path) = user_config_dir() {
            assert!(path.as_str().contains("buzzword-swap"));
        }
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_env_var_overrides_file_config() {
        let _lock = env_lock();

        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, "similarity_threshold = 0.3\n").unwrap();
        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        // SAFETY: mutex serializes env access across tests.
        unsafe {
            std::env::set_var("BUZZWORD_SWAP_SIMILARITY_THRESHOLD", "0.8");
        }

        let result = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load();

        // SAFETY: cleanup under the same lock.
        unsafe {
            std::env::remove_var("BUZZWORD_SWAP_SIMILARITY_THRESHOLD");
        }

        let (config, _sources) = result.unwrap();
        assert_eq!(config.similarity_threshold, 0.8);
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_env_var_sets_highlight() {
        let _lock = env_lock();

        // SAFETY: mutex serializes env access across tests.
        unsafe {
            std::env::set_var("BUZZWORD_SWAP_HIGHLIGHT", "none");
        }

        let result = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load();

        // SAFETY: cleanup under the same lock.
        unsafe {
            std::env::remove_var("BUZZWORD_SWAP_HIGHLIGHT");
        }

        assert_eq!(result.unwrap().0.highlight, HighlightStyle::None);
    }
}
