//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use lexis_extractor::AnalyzerConfig;
use lexis_llm::openai;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variables consulted for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["LEXIS_API_KEY", "OPENAI_API_KEY"];

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Generation provider settings
    #[serde(default)]
    pub provider: ProviderSettings,

    /// Analyzer settings
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Generation provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Chat-completions endpoint base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API key; the environment takes precedence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Attempts per generation call
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".lexis").join("config.toml"))
    }

    /// Load configuration from a specific file, defaulting if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Resolve the API key: environment first, then the config file.
    pub fn api_key(&self) -> Option<String> {
        API_KEY_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .chain(self.provider.api_key.clone())
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
    }

    /// Set a single value by its dotted or bare key name.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "endpoint" | "provider.endpoint" => self.provider.endpoint = value.to_string(),
            "model" | "provider.model" => self.provider.model = value.to_string(),
            "api_key" | "provider.api_key" => self.provider.api_key = Some(value.to_string()),
            "max_retries" | "provider.max_retries" => {
                self.provider.max_retries = parse_value(key, value)?;
            }
            "source_language" | "analyzer.source_language" => {
                self.analyzer.source_language = value.to_string();
            }
            "target_language" | "analyzer.target_language" => {
                self.analyzer.target_language = value.to_string();
            }
            "translate" | "analyzer.translate" => self.analyzer.translate = parse_value(key, value)?,
            "max_text_length" | "analyzer.max_text_length" => {
                self.analyzer.max_text_length = parse_value(key, value)?;
            }
            "generation_timeout_secs" | "analyzer.generation_timeout_secs" => {
                self.analyzer.generation_timeout_secs = parse_value(key, value)?;
            }
            "color" | "settings.color" => self.settings.color = parse_value(key, value)?,
            "format" | "settings.format" => {
                self.settings.format = match value.to_lowercase().as_str() {
                    "table" => OutputFormat::Table,
                    "json" => OutputFormat::Json,
                    "csv" => OutputFormat::Csv,
                    other => {
                        return Err(CliError::InvalidInput(format!("Unknown output format '{}'", other)))
                    }
                };
            }
            other => return Err(CliError::InvalidInput(format!("Unknown config key '{}'", other))),
        }

        self.validate()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.provider.endpoint.trim().is_empty() {
            return Err(CliError::Config("provider.endpoint must not be empty".into()));
        }
        if self.provider.model.trim().is_empty() {
            return Err(CliError::Config("provider.model must not be empty".into()));
        }
        self.analyzer.validate().map_err(CliError::Config)
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::InvalidInput(format!("Invalid value '{}' for '{}'", value, key)))
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: None,
            max_retries: default_max_retries(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_endpoint() -> String {
    openai::DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    openai::DEFAULT_MODEL.to_string()
}

fn default_max_retries() -> u32 {
    openai::DEFAULT_MAX_RETRIES
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
