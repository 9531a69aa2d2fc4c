//! Plugin activation.
//!
//! Activation picks the engine backend once, then registers a handler for every
//! catalog entry the resolved configuration enables.

use super::command::CommandHandler;
use super::core::CommandHost;
use crate::catalog::CATALOG;
use crate::config::PluginConfig;
use crate::engine::{Backend, RandomEngine, SeededSource, SharedEngine};
use crate::error::EngineError;
use std::sync::Arc;
use tracing::{debug, info};

/// Build the engine the configuration asks for.
///
/// `crypto` selects the OS CSPRNG. Otherwise a seeded PRNG is used, with `seed`
/// when given and an OS-drawn seed when not.
pub fn select_engine(plugin: &PluginConfig, seed: Option<u64>) -> Result<RandomEngine, EngineError> {
    if plugin.crypto() {
        info!(backend = %Backend::Secure, "Using secure entropy backend");
        return Ok(RandomEngine::secure());
    }

    let source = match seed {
        Some(seed) => SeededSource::new(seed),
        None => SeededSource::auto_seeded()?,
    };
    info!(
        backend = %Backend::Seeded,
        seed = source.seed(),
        "Using seeded entropy backend"
    );
    Ok(RandomEngine::new(source))
}

/// A live plugin instance: the shared engine and what was registered.
#[derive(Debug)]
pub struct Activation {
    engine: SharedEngine,
    registered: Vec<&'static str>,
}

impl Activation {
    /// The engine every registered handler draws from.
    pub fn engine(&self) -> &SharedEngine {
        &self.engine
    }

    pub fn backend(&self) -> Backend {
        self.engine.lock().backend()
    }

    /// Names registered with the host, in catalog order.
    pub fn registered(&self) -> &[&'static str] {
        &self.registered
    }

    /// Tear the instance down. Nothing is held beyond the engine.
    pub fn deactivate(self) {
        debug!(commands = self.registered.len(), "Randomizer deactivated");
    }
}

/// Register every enabled catalog command with `host`.
///
/// The first registration failure is returned unchanged.
pub fn activate<H: CommandHost>(
    host: &mut H,
    plugin: &PluginConfig,
    engine: RandomEngine,
) -> Result<Activation, H::Error> {
    let engine = engine.into_shared();
    let mut registered = Vec::new();

    for entry in &CATALOG {
        if !plugin.is_enabled(entry.name) {
            debug!(command = entry.name, "Command disabled by config");
            continue;
        }
        let handler = CommandHandler::new(entry, Arc::clone(&engine));
        host.register_command(entry.name, entry.help, Arc::new(handler))?;
        debug!(command = entry.name, "Command registered");
        registered.push(entry.name);
    }

    info!(count = registered.len(), "Randomizer activated");
    Ok(Activation { engine, registered })
}
