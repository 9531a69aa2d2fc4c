//! slircd-randomizer - dice, coins and oracles for chat command interpreters.
//!
//! The crate provides a randomness engine with secure and seeded backends, one
//! pure algorithm per command (`pick`, `shuffle`, `magic8`, `wasteaguid`,
//! `password`, `decide`, `flip`, `try`), a static catalog of those commands, and
//! the activation glue that registers the enabled ones with a host.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod host;
pub mod metrics;
pub mod telemetry;

pub use catalog::{CATALOG, CatalogEntry};
pub use commands::{Invocation, Origin};
pub use config::{Config, PluginConfig, PluginOverrides};
pub use engine::{Backend, RandomEngine, SharedEngine};
pub use error::{CommandError, EngineError, HandlerError};
pub use handlers::{Activation, CommandHost, Handler, Registry, ReplySink, activate, select_engine};
