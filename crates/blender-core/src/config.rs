//! Configuration types for the validator.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration, usually loaded from `blender.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset to use (e.g., "full", "dependencies", "structural").
    #[serde(default)]
    pub preset: Option<String>,

    /// Severity threshold for a failing run (default: "error").
    /// Findings at or above this severity make the CLI exit non-zero.
    #[serde(default)]
    pub fail_on: Option<String>,

    /// Validator configuration.
    #[serde(default)]
    pub validator: ValidatorConfig,

    /// Per-rule configurations, keyed by rule name.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<crate::Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// Gets an option of a rule, if configured.
    #[must_use]
    pub fn rule_option<T: serde::de::DeserializeOwned>(&self, rule_name: &str, key: &str) -> Option<T> {
        self.rules.get(rule_name).and_then(|c| c.get_option(key))
    }

    /// Parses `fail_on`, falling back to `error`.
    ///
    /// # Errors
    ///
    /// Returns an error if `fail_on` names an unknown severity.
    pub fn fail_on_severity(&self) -> Result<crate::Severity, ConfigError> {
        self.fail_on
            .as_deref()
            .map_or(Ok(crate::Severity::Error), |s| {
                s.parse().map_err(|e: crate::ParseSeverityError| ConfigError::Parse {
                    message: e.to_string(),
                })
            })
    }
}

/// Validator-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Evaluate disabled checks as if they were enabled.
    ///
    /// Off by default: a disabled check neither needs nor satisfies a
    /// prerequisite.
    #[serde(default)]
    pub include_disabled: bool,
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<crate::Severity>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Gets an option value as a specific type.
    #[must_use]
    pub fn get_option<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.options
            .get(key)
            .and_then(|v| v.clone().try_into().ok())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.validator.include_disabled);
        assert!(config.rules.is_empty());
        assert_eq!(config.fail_on_severity().unwrap(), Severity::Error);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
preset = "dependencies"
fail_on = "warning"

[validator]
include_disabled = true

[rules.files-exist-source]
enabled = false

[rules.printer-driver]
severity = "warning"

[rules.asset-path-prefix]
prefix = "Payload"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.preset.as_deref(), Some("dependencies"));
        assert!(config.validator.include_disabled);
        assert!(!config.is_rule_enabled("files-exist-source"));
        assert!(config.is_rule_enabled("printer-driver"));
        assert_eq!(
            config.rule_severity("printer-driver"),
            Some(Severity::Warning)
        );
        assert_eq!(config.fail_on_severity().unwrap(), Severity::Warning);
        assert_eq!(
            config.rule_option::<String>("asset-path-prefix", "prefix").as_deref(),
            Some("Payload")
        );
        assert_eq!(config.rule_option::<String>("printer-driver", "prefix"), None);
    }

    #[test]
    fn test_invalid_fail_on() {
        let config = Config::parse("fail_on = \"fatal\"").unwrap();
        assert!(config.fail_on_severity().is_err());
    }

    #[test]
    fn test_from_file_reports_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
