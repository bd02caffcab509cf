//! Configuration for spamcheck-rs

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SpamError};

/// Default decision boundary
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Default number of vocabulary slots reserved up front
pub const DEFAULT_INITIAL_CAPACITY: usize = 5000;

/// Default key length bound, in bytes.
///
/// Words longer than this are cut before they are used as vocabulary keys,
/// so two long words sharing the same prefix end up in one entry.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 99;

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Classifier configuration
    #[serde(default)]
    pub classifier: ClassifierConfig,
    /// Vocabulary storage configuration
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Classifier configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassifierConfig {
    /// Spam probability at or above which a message is spam
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

/// Vocabulary storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VocabularyConfig {
    /// Initial number of entries reserved; doubles when full
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
    /// Maximum key length in bytes
    #[serde(default = "default_max_word_length")]
    pub max_word_length: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive (e.g., "info", "spamcheck_rs=debug")
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format: pretty, compact or json
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_initial_capacity() -> usize {
    DEFAULT_INITIAL_CAPACITY
}

fn default_max_word_length() -> usize {
    DEFAULT_MAX_WORD_LENGTH
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
            max_word_length: default_max_word_length(),
        }
    }
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
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SpamError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| SpamError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let threshold = self.classifier.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(SpamError::InvalidThreshold(threshold));
        }

        if self.vocabulary.initial_capacity == 0 {
            return Err(SpamError::Config(
                "vocabulary.initial_capacity must be at least 1".to_string(),
            ));
        }

        if self.vocabulary.max_word_length == 0 {
            return Err(SpamError::Config(
                "vocabulary.max_word_length must be at least 1".to_string(),
            ));
        }

        match self.logging.format.as_str() {
            "pretty" | "compact" | "json" => Ok(()),
            other => Err(SpamError::Config(format!(
                "Unknown logging format '{}' (expected pretty, compact or json)",
                other
            ))),
        }
    }
}
