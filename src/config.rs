//! Application configuration.
//!
//! The engine itself takes every input explicitly. This configuration
//! carries the caller-side policy: the allowed length range, default
//! classes, randomness fallback and where history lives.

use crate::charset::{CharacterClass, ClassSet};
use crate::randomness::SourcePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid length bounds: min {min}, default {default}, max {max}")]
    InvalidLengthBounds {
        min: usize,
        default: usize,
        max: usize,
    },
    #[error("length {length} outside allowed range {min}-{max}")]
    LengthOutOfRange {
        length: usize,
        min: usize,
        max: usize,
    },
    #[error("no default character class configured")]
    NoDefaultClasses,
    #[error("history must keep at least one entry")]
    InvalidHistoryLimit,
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Generator defaults and bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Length used when the caller does not ask for one.
    pub default_length: usize,
    /// Smallest length callers may request.
    pub min_length: usize,
    /// Largest length callers may request.
    pub max_length: usize,
    /// Classes used when the caller does not choose any.
    pub classes: Vec<CharacterClass>,
    /// Permit falling back to a time-seeded generator if OS entropy fails.
    pub allow_degraded_randomness: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_length: 16,
            min_length: 8,
            max_length: 32,
            classes: CharacterClass::ALL.to_vec(),
            allow_degraded_randomness: false,
        }
    }
}

impl GeneratorConfig {
    /// Validates the generator parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_length == 0
            || self.min_length > self.default_length
            || self.default_length > self.max_length
        {
            return Err(ConfigError::InvalidLengthBounds {
                min: self.min_length,
                default: self.default_length,
                max: self.max_length,
            });
        }
        if self.classes.is_empty() {
            return Err(ConfigError::NoDefaultClasses);
        }
        Ok(())
    }

    /// Checks a requested length against the configured range.
    pub fn check_length(&self, length: usize) -> Result<(), ConfigError> {
        if length < self.min_length || length > self.max_length {
            return Err(ConfigError::LengthOutOfRange {
                length,
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(())
    }

    /// Default classes as a set.
    pub fn class_set(&self) -> ClassSet {
        self.classes.iter().copied().collect()
    }

    /// Randomness fallback policy.
    pub fn source_policy(&self) -> SourcePolicy {
        if self.allow_degraded_randomness {
            SourcePolicy::AllowDegraded
        } else {
            SourcePolicy::SecureOnly
        }
    }
}

/// History persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Record generated passwords.
    pub enabled: bool,
    /// Generation history file (JSON).
    pub path: PathBuf,
    /// Saved password fingerprints file (JSON).
    pub saved_path: PathBuf,
    /// Default destination of `history export`.
    pub export_path: PathBuf,
    /// Entries kept, newest first.
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from("password_history.json"),
            saved_path: PathBuf::from("saved_passwords.json"),
            export_path: PathBuf::from("password_export.txt"),
            max_entries: 20,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator.validate()?;
        if self.history.max_entries == 0 {
            return Err(ConfigError::InvalidHistoryLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.generator.class_set(), ClassSet::all());
        assert_eq!(config.generator.source_policy(), SourcePolicy::SecureOnly);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = FileConfig::from_toml("").unwrap();
        assert_eq!(config.generator.default_length, 16);
        assert_eq!(config.history.max_entries, 20);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_sections() {
        let config = FileConfig::from_toml(
            r#"
            [generator]
            default_length = 24
            classes = ["lowercase", "digit"]
            allow_degraded_randomness = true

            [history]
            max_entries = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.generator.default_length, 24);
        assert_eq!(config.generator.max_length, 32);
        assert_eq!(
            config.generator.class_set(),
            ClassSet::empty()
                .with(CharacterClass::Lowercase)
                .with(CharacterClass::Digit)
        );
        assert_eq!(config.generator.source_policy(), SourcePolicy::AllowDegraded);
        assert_eq!(config.history.max_entries, 5);
        assert!(config.history.enabled);
    }

    #[test]
    fn test_default_outside_bounds_invalid() {
        let mut config = FileConfig::default();
        config.generator.default_length = 40;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLengthBounds { .. })
        ));
    }

    #[test]
    fn test_no_classes_invalid() {
        let result = FileConfig::from_toml("[generator]\nclasses = []\n");
        assert_eq!(result.unwrap_err(), ConfigError::NoDefaultClasses);
    }

    #[test]
    fn test_unknown_class_is_parse_error() {
        let result = FileConfig::from_toml("[generator]\nclasses = [\"emoji\"]\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_check_length() {
        let config = GeneratorConfig::default();
        assert!(config.check_length(8).is_ok());
        assert!(config.check_length(32).is_ok());
        assert!(matches!(
            config.check_length(7),
            Err(ConfigError::LengthOutOfRange { length: 7, .. })
        ));
        assert!(config.check_length(33).is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = FileConfig::from_file("/nonexistent/keysmith.toml");
        assert!(matches!(result, Err(ConfigError::FileReadError(_))));
    }
}
