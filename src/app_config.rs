use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use url::Url;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Target language code (ISO)
    pub target_language: String,

    /// Translation config
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation endpoint and request configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Chat-completion endpoint URL (OpenAI-compatible)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key, sent as a bearer token
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Number of batches the dialogue lines are split into (1-100)
    #[serde(default = "default_batch_count")]
    pub batch_count: usize,

    /// Sampling temperature (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Optional user-supplied system prompt prepended to every batch request
    #[serde(default)]
    pub system_prompt: Option<String>,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: String::new(),
            model: default_model(),
            batch_count: default_batch_count(),
            temperature: default_temperature(),
            system_prompt: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_language: default_target_language(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration before a run starts
    ///
    /// Failures here are fatal: the pipeline is never entered with an empty
    /// credential, an unparseable endpoint, or out-of-range knobs.
    pub fn validate(&self) -> Result<()> {
        if self.target_language.trim().is_empty() {
            return Err(anyhow!("Target language must not be empty"));
        }
        crate::language_utils::validate_language_code(&self.target_language)?;

        if self.translation.api_key.trim().is_empty() {
            return Err(anyhow!("API key must not be empty"));
        }

        Url::parse(&self.translation.endpoint)
            .map_err(|e| anyhow!("Invalid endpoint URL '{}': {}", self.translation.endpoint, e))?;

        if !(1..=100).contains(&self.translation.batch_count) {
            return Err(anyhow!(
                "Batch count must be between 1 and 100, got {}",
                self.translation.batch_count
            ));
        }

        if !(0.0..=1.0).contains(&self.translation.temperature) {
            return Err(anyhow!(
                "Temperature must be between 0.0 and 1.0, got {}",
                self.translation.temperature
            ));
        }

        Ok(())
    }
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level (default)
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

impl LogLevel {
    /// Corresponding `log` crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_target_language() -> String {
    "zh".to_string()
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_batch_count() -> usize {
    10
}

fn default_temperature() -> f32 {
    0.3
}
