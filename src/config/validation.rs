//! Configuration validation.
//!
//! Validates configuration at load time to catch common errors early.

use super::Config;
use super::plugin::CRYPTO_KEY;
use crate::catalog;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("host.prefix must not be empty")]
    EmptyPrefix,
    #[error("host.prefix must not contain whitespace, got '{0}'")]
    PrefixWhitespace(String),
    #[error("plugin.{0} is not a recognized key")]
    UnknownPluginKey(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let prefix = &config.host.prefix;
    if prefix.is_empty() {
        errors.push(ValidationError::EmptyPrefix);
    } else if prefix.chars().any(char::is_whitespace) {
        errors.push(ValidationError::PrefixWhitespace(prefix.clone()));
    }

    for key in config.plugin.keys() {
        if key != CRYPTO_KEY && catalog::lookup(key).is_none() {
            errors.push(ValidationError::UnknownPluginKey(key.to_string()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
