use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::builders::patterns::DirectivePatternSet;

/// Where SQL view definitions live, relative to the working directory.
pub const DEFAULT_DISCOVERY_PATTERN: &str = "sql/views/**/*.sql";

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GlobalSettings {
    /// Match and report, but never write files.
    pub dry_run: bool,
    /// Print the matched directive keyword next to every removed comment.
    pub verbose: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CleanerConfig {
    pub version: String,
    pub discovery_pattern: String,
    pub directives: DirectivePatternSet,
    pub global_settings: GlobalSettings,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            discovery_pattern: DEFAULT_DISCOVERY_PATTERN.to_string(),
            directives: DirectivePatternSet::default(),
            global_settings: GlobalSettings::default(),
        }
    }
}

/// Serialization formats accepted for configuration files and exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Picks a format from a file extension, falling back to TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ConfigFormat::Json,
            Some("yaml") | Some("yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Toml,
        }
    }

    pub fn parse_config(&self, content: &str) -> Result<CleanerConfig> {
        match self {
            ConfigFormat::Toml => toml::from_str(content).context("Failed to parse TOML config"),
            ConfigFormat::Json => {
                serde_json::from_str(content).context("Failed to parse JSON config")
            }
            ConfigFormat::Yaml => {
                serde_yaml::from_str(content).context("Failed to parse YAML config")
            }
        }
    }

    pub fn render_config(&self, config: &CleanerConfig) -> Result<String> {
        match self {
            ConfigFormat::Toml => {
                toml::to_string_pretty(config).context("Failed to serialize to TOML")
            }
            ConfigFormat::Json => {
                serde_json::to_string_pretty(config).context("Failed to serialize to JSON")
            }
            ConfigFormat::Yaml => serde_yaml::to_string(config).context("Failed to serialize to YAML"),
        }
    }
}

impl FromStr for ConfigFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "toml" => Ok(ConfigFormat::Toml),
            "json" => Ok(ConfigFormat::Json),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            other => Err(format!(
                "unknown config format '{other}' (expected toml, json or yaml)"
            )),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::Toml => write!(f, "toml"),
            ConfigFormat::Json => write!(f, "json"),
            ConfigFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Loads the cleaner configuration.
///
/// Without an explicit path nothing is read from disk and the built-in
/// defaults apply.
pub struct ConfigManager {
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self { config_path }
    }

    pub fn load_config(&self) -> Result<CleanerConfig> {
        let Some(path) = &self.config_path else {
            return Ok(CleanerConfig::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let format = ConfigFormat::from_path(path);
        log::debug!("Loading {} config from {}", format, path.display());

        format
            .parse_config(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}
