//! Plugin switches: which commands to register and which backend to use.
//!
//! The file supplies [`PluginOverrides`]; [`PluginConfig::resolve`] merges them
//! onto the catalog defaults and returns a new, fully populated value. The
//! overrides themselves are never modified.

use super::defaults::default_crypto;
use crate::catalog::CATALOG;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Key selecting the secure backend.
pub const CRYPTO_KEY: &str = "crypto";

/// Caller-supplied switches keyed by command name or `crypto`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PluginOverrides(BTreeMap<String, bool>);

impl PluginOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, key: impl Into<String>, value: bool) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        self.0.get(key).copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Resolved switches. Every recognized key has a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfig {
    crypto: bool,
    commands: BTreeMap<&'static str, bool>,
}

impl PluginConfig {
    /// Catalog defaults with no overrides applied.
    pub fn defaults() -> Self {
        Self::resolve(&PluginOverrides::default())
    }

    /// Fill every key absent from `overrides` with its default.
    ///
    /// Unrecognized override keys are ignored here; validation reports them.
    pub fn resolve(overrides: &PluginOverrides) -> Self {
        let crypto = overrides.get(CRYPTO_KEY).unwrap_or_else(default_crypto);
        let commands = CATALOG
            .iter()
            .map(|entry| {
                let enabled = overrides.get(entry.name).unwrap_or(entry.enabled_by_default);
                (entry.name, enabled)
            })
            .collect();
        Self { crypto, commands }
    }

    /// Whether the secure backend was requested.
    pub fn crypto(&self) -> bool {
        self.crypto
    }

    /// Whether `name` should be registered. Unknown names are never enabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.commands.get(name).copied().unwrap_or(false)
    }

    /// Every recognized key with its resolved value.
    pub fn to_map(&self) -> BTreeMap<&'static str, bool> {
        let mut map = self.commands.clone();
        map.insert(CRYPTO_KEY, self.crypto);
        map
    }
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self::defaults()
    }
}
