//! # Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --snapshot ./state.json --format html --count-renders              │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     CARTVIEW_SNAPSHOT, CARTVIEW_FORMAT,                                │
//! │     CARTVIEW_COUNT_RENDERS, CARTVIEW_LOG                               │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <PATH>, or                                                │
//! │     ~/.config/cartview/cartview.toml (Linux)                           │
//! │     ~/Library/Application Support/cartview/cartview.toml (macOS)       │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     sample state, text output, no counting                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # cartview.toml
//! snapshot_path = "./state.json"
//! format = "html"          # text | html
//! count_renders = true
//! log_filter = "info,cartview=debug"
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use cartview_render::Format;
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::debug;

use crate::cli::Cli;

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "cartview.toml";

/// Default `tracing` filter when neither `RUST_LOG` nor config sets one.
pub const DEFAULT_LOG_FILTER: &str = "info,cartview=debug";

// =============================================================================
// Output Format
// =============================================================================

/// How the page is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Plain text lines.
    #[default]
    Text,
    /// HTML markup.
    Html,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            _ => Err(ConfigError::InvalidValue {
                key: "format".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Format::Text,
            OutputFormat::Html => Format::Html,
        }
    }
}

// =============================================================================
// App Config
// =============================================================================

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Snapshot document to load; the sample state is used when unset.
    pub snapshot_path: Option<PathBuf>,

    pub format: OutputFormat,

    /// Count selector and render calls and log the totals.
    pub count_renders: bool,

    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            snapshot_path: None,
            format: OutputFormat::Text,
            count_renders: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from file, environment, and command line.
    ///
    /// An explicit `--config` path must exist. The platform default path is
    /// optional and silently skipped when absent.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::load_with(cli, |key| std::env::var(key).ok())
    }

    /// [`AppConfig::load`] with environment variables read through `lookup`.
    pub fn load_with<F>(cli: &Cli, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                other => {
                    debug!(path = ?other, "Config file not found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides(lookup)?;
        config.apply_cli(cli);

        Ok(config)
    }

    /// Reads a TOML config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(?path, "Loaded config file");
        Ok(config)
    }

    /// Returns the platform-specific config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "cartview").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Applies `CARTVIEW_*` overrides read through `lookup`.
    ///
    /// Takes a lookup function instead of reading the process environment
    /// directly so tests do not have to mutate global state.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("CARTVIEW_SNAPSHOT") {
            debug!(%path, "Overriding snapshot path from environment");
            self.snapshot_path = Some(PathBuf::from(path));
        }

        if let Some(format) = lookup("CARTVIEW_FORMAT") {
            self.format = format.parse()?;
        }

        if let Some(value) = lookup("CARTVIEW_COUNT_RENDERS") {
            self.count_renders = parse_bool("CARTVIEW_COUNT_RENDERS", &value)?;
        }

        if let Some(filter) = lookup("CARTVIEW_LOG") {
            self.log_filter = filter;
        }

        Ok(())
    }

    /// Applies command-line flags. `--count-renders` can only switch
    /// counting on.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(path) = &cli.snapshot {
            self.snapshot_path = Some(path.clone());
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if cli.count_renders {
            self.count_renders = true;
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.snapshot_path, None);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.count_renders);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_from_file_with_partial_keys() {
        let file = write_config("format = \"html\"\ncount_renders = true\n");
        let config = AppConfig::from_file(file.path()).unwrap();

        assert_eq!(config.format, OutputFormat::Html);
        assert!(config.count_renders);
        assert_eq!(config.snapshot_path, None);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_from_file_errors() {
        let missing = AppConfig::from_file(Path::new("/definitely/not/here/cartview.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let file = write_config("format = \"pdf\"\n");
        assert!(matches!(
            AppConfig::from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config
            .apply_env_overrides(env(&[
                ("CARTVIEW_SNAPSHOT", "/tmp/state.json"),
                ("CARTVIEW_FORMAT", "HTML"),
                ("CARTVIEW_COUNT_RENDERS", "yes"),
                ("CARTVIEW_LOG", "warn"),
            ]))
            .unwrap();

        assert_eq!(config.snapshot_path, Some(PathBuf::from("/tmp/state.json")));
        assert_eq!(config.format, OutputFormat::Html);
        assert!(config.count_renders);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_env_invalid_values() {
        let mut config = AppConfig::default();
        let err = config
            .apply_env_overrides(env(&[("CARTVIEW_FORMAT", "pdf")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "format"));

        let err = config
            .apply_env_overrides(env(&[("CARTVIEW_COUNT_RENDERS", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_cli_overrides_env_and_file() {
        let file = write_config("format = \"text\"\nsnapshot_path = \"from-file.json\"\n");
        let mut config = AppConfig::from_file(file.path()).unwrap();
        config
            .apply_env_overrides(env(&[("CARTVIEW_SNAPSHOT", "from-env.json")]))
            .unwrap();
        assert_eq!(config.snapshot_path, Some(PathBuf::from("from-env.json")));

        let cli = Cli::parse_from([
            "cartview",
            "--snapshot",
            "from-cli.json",
            "--format",
            "html",
            "--count-renders",
        ]);
        config.apply_cli(&cli);

        assert_eq!(config.snapshot_path, Some(PathBuf::from("from-cli.json")));
        assert_eq!(config.format, OutputFormat::Html);
        assert!(config.count_renders);
    }

    #[test]
    fn test_load_with_explicit_config() {
        let file = write_config("count_renders = true\n");
        let path = file.path().to_str().unwrap().to_string();
        let cli = Cli::parse_from(["cartview", "--config", path.as_str()]);

        let config = AppConfig::load_with(&cli, env(&[])).unwrap();
        assert!(config.count_renders);
        assert_eq!(config.format, OutputFormat::Text);

        let config = AppConfig::load_with(&cli, env(&[("CARTVIEW_FORMAT", "html")])).unwrap();
        assert_eq!(config.format, OutputFormat::Html);
    }

    #[test]
    fn test_load_with_missing_explicit_config() {
        let cli = Cli::parse_from(["cartview", "--config", "/definitely/not/here/cartview.toml"]);
        assert!(matches!(
            AppConfig::load_with(&cli, env(&[])),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_output_format_maps_to_render_format() {
        assert_eq!(Format::from(OutputFormat::Text), Format::Text);
        assert_eq!(Format::from(OutputFormat::Html), Format::Html);
    }
}
