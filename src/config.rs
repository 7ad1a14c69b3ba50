//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::store::{DateRange, Preferences};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub demo: DemoConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Data generation settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DemoConfig {
    /// Fixed seed for reproducible datasets; entropy when absent
    pub seed: Option<u64>,
}

/// Initial UI preferences
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub dark_mode: bool,

    #[serde(default = "default_sidebar_open")]
    pub sidebar_open: bool,

    #[serde(default)]
    pub date_range: DateRange,
}

fn default_sidebar_open() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            sidebar_open: default_sidebar_open(),
            date_range: DateRange::default(),
        }
    }
}

impl UiConfig {
    pub fn preferences(&self) -> Preferences {
        Preferences {
            dark_mode: self.dark_mode,
            sidebar_open: self.sidebar_open,
            date_range: self.date_range,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("thummar").join("config.toml")),
            Some(PathBuf::from("./thummar.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(seed) = var("THUMMAR_SEED") {
            match seed.parse() {
                Ok(seed) => self.demo.seed = Some(seed),
                Err(_) => tracing::warn!("Ignoring invalid THUMMAR_SEED: {}", seed),
            }
        }

        if let Some(dark) = var("THUMMAR_DARK_MODE") {
            self.ui.dark_mode = matches!(dark.to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Some(range) = var("THUMMAR_DATE_RANGE") {
            match range.parse() {
                Ok(range) => self.ui.date_range = range,
                Err(e) => tracing::warn!("Ignoring THUMMAR_DATE_RANGE: {}", e),
            }
        }

        if let Some(level) = var("THUMMAR_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("THUMMAR_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Thummar Analytics Configuration
#
# Environment variables override these settings:
# - THUMMAR_SEED
# - THUMMAR_DARK_MODE
# - THUMMAR_DATE_RANGE
# - THUMMAR_LOG_LEVEL
# - THUMMAR_LOG_FORMAT

[demo]
# Fixed seed for reproducible demo data (omit for a fresh dataset every run)
# seed = 42

[ui]
# Start in dark mode
dark_mode = false

# Start with the sidebar expanded
sidebar_open = true

# Reporting window: 7d, 30d, 90d or 1y
date_range = "30d"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config_template_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.demo.seed, None);
        assert!(!config.ui.dark_mode);
        assert!(config.ui.sidebar_open);
        assert_eq!(config.ui.date_range, DateRange::Last30Days);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[ui]\ndate_range = \"90d\"\n").unwrap();
        assert_eq!(config.ui.date_range, DateRange::Last90Days);
        assert!(config.ui.sidebar_open);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[demo]\nseed = 7\n[ui]\ndark_mode = true\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.demo.seed, Some(7));
        assert!(config.ui.preferences().dark_mode);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[ui]\ndate_range = \"2w\"\n").unwrap();
        assert!(matches!(Config::load(&bad), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("THUMMAR_SEED", "11"),
            ("THUMMAR_DARK_MODE", "TRUE"),
            ("THUMMAR_DATE_RANGE", "7d"),
            ("THUMMAR_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.demo.seed, Some(11));
        assert!(config.ui.dark_mode);
        assert_eq!(config.ui.date_range, DateRange::Last7Days);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "THUMMAR_SEED" => Some("abc".to_string()),
            "THUMMAR_DATE_RANGE" => Some("forever".to_string()),
            _ => None,
        });
        assert_eq!(config.demo.seed, None);
        assert_eq!(config.ui.date_range, DateRange::Last30Days);
    }
}
