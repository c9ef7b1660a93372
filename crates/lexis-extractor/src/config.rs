//! Configuration for the Analyzer

use lexis_domain::Language;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum input sentence length (characters)
    pub max_text_length: usize,

    /// Maximum time for a single generation call (seconds)
    pub generation_timeout_secs: u64,

    /// Default source language code
    pub source_language: String,

    /// Default target language code
    pub target_language: String,

    /// Whether to request a full-sentence translation
    pub translate: bool,
}

impl AnalyzerConfig {
    /// Get the generation timeout as a Duration
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    /// Parsed source language
    pub fn source(&self) -> Result<Language, String> {
        self.source_language.parse()
    }

    /// Parsed target language
    pub fn target(&self) -> Result<Language, String> {
        self.target_language.parse()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        if self.generation_timeout_secs == 0 {
            return Err("generation_timeout_secs must be greater than 0".to_string());
        }
        self.source()?;
        self.target()?;
        Ok(())
    }
}

impl Default for AnalyzerConfig {
    /// Chinese sentences analyzed into Thai, with translation
    fn default() -> Self {
        Self {
            max_text_length: 2_000,
            generation_timeout_secs: 120,
            source_language: Language::Chinese.code().to_string(),
            target_language: Language::Thai.code().to_string(),
            translate: true,
        }
    }
}

impl AnalyzerConfig {
    /// Vocabulary-only preset: no translation request, shorter timeout
    pub fn vocabulary_only() -> Self {
        Self {
            generation_timeout_secs: 60,
            translate: false,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
