//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions and TOML loading
//! - [`plugin`]: Command/backend switches and the defaults merge
//! - [`validation`]: Load-time checks
//! - [`defaults`]: Serde default functions

mod defaults;
mod plugin;
mod types;
mod validation;

pub use plugin::{CRYPTO_KEY, PluginConfig, PluginOverrides};
pub use types::{Config, ConfigError, EngineConfig, HostConfig, MetricsConfig};
pub use validation::{ValidationError, validate};
