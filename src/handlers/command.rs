//! Adapter from a catalog entry to a registered [`Handler`].

use super::core::{Handler, ReplySink};
use crate::catalog::CatalogEntry;
use crate::commands::Invocation;
use crate::engine::SharedEngine;
use crate::error::HandlerResult;
use async_trait::async_trait;

/// Runs one catalog command against the shared engine.
pub struct CommandHandler {
    entry: &'static CatalogEntry,
    engine: SharedEngine,
}

impl CommandHandler {
    pub fn new(entry: &'static CatalogEntry, engine: SharedEngine) -> Self {
        Self { entry, engine }
    }

    pub fn name(&self) -> &'static str {
        self.entry.name
    }
}

#[async_trait]
impl Handler for CommandHandler {
    async fn handle(&self, inv: &Invocation, reply: &ReplySink<'_>) -> HandlerResult {
        // The engine lock must be released before the reply is awaited.
        let text = {
            let mut engine = self.engine.lock();
            (self.entry.run)(&mut *engine, inv)?
        };
        reply.send(text).await?;
        Ok(())
    }
}
