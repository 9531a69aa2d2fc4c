//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::defaults::{default_host_name, default_prefix};
use super::plugin::{PluginConfig, PluginOverrides};
use super::validation::{ValidationError, validate};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Randomizer configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Console host settings.
    pub host: HostConfig,
    /// Engine settings.
    pub engine: EngineConfig,
    /// Command and backend switches.
    pub plugin: PluginOverrides,
    /// Metrics output.
    pub metrics: MetricsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        validate(&config).map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Plugin switches merged onto catalog defaults.
    pub fn resolved_plugin(&self) -> PluginConfig {
        PluginConfig::resolve(&self.plugin)
    }
}

/// Console host configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Command trigger (e.g., "!" for "!pick").
    pub prefix: String,
    /// Name the host answers as.
    pub name: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            name: default_host_name(),
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the deterministic backend. Ignored when `plugin.crypto` is on.
    /// Absent means seed from OS entropy.
    pub seed: Option<u64>,
}

/// Metrics configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Print the Prometheus text exposition when the host exits.
    pub dump_on_exit: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.host.prefix, "!");
        assert_eq!(config.host.name, "randomizer");
        assert_eq!(config.engine.seed, None);
        assert!(!config.metrics.dump_on_exit);
        assert_eq!(config.resolved_plugin(), PluginConfig::defaults());
    }

    #[test]
    fn full_document_parses() {
        let config = Config::from_toml_str(
            r#"
            [host]
            prefix = "?"
            name = "oracle"

            [engine]
            seed = 42

            [plugin]
            crypto = false
            magic8 = false

            [metrics]
            dump_on_exit = true
            "#,
        )
        .unwrap();

        assert_eq!(config.host.prefix, "?");
        assert_eq!(config.host.name, "oracle");
        assert_eq!(config.engine.seed, Some(42));
        assert!(config.metrics.dump_on_exit);

        let plugin = config.resolved_plugin();
        assert!(!plugin.crypto());
        assert!(!plugin.is_enabled("magic8"));
        assert!(plugin.is_enabled("pick"));
    }

    #[test]
    fn non_boolean_plugin_value_is_a_parse_error() {
        let err = Config::from_toml_str("[plugin]\npick = \"yes\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_plugin_key_is_invalid() {
        let err = Config::from_toml_str("[plugin]\nroll = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref errors) if errors.len() == 1));
        assert_eq!(err.to_string(), "invalid config: plugin.roll is not a recognized key");
    }
}
