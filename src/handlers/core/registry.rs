//! Command handler registry and dispatch.
//!
//! The `Registry` is the in-process [`CommandHost`]: it stores registered
//! handlers, dispatches invocations to them, and keeps usage statistics.

use super::middleware::ReplySink;
use super::traits::{CommandHost, Handler};
use crate::commands::Invocation;
use crate::error::{HandlerError, HandlerResult};
use crate::telemetry::CommandTimer;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tracing::{Instrument, Level, debug, span};

/// Metric label used for every unregistered command name.
pub const UNKNOWN_COMMAND_LABEL: &str = "unknown";

/// Registration failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("command already registered: {0}")]
    Duplicate(&'static str),
}

struct Registered {
    help: &'static str,
    handler: Arc<dyn Handler>,
}

/// Registry of command handlers.
#[derive(Default)]
pub struct Registry {
    handlers: HashMap<&'static str, Registered>,
    /// Command usage counters
    command_counts: HashMap<&'static str, Arc<AtomicU64>>,
}

impl CommandHost for Registry {
    type Error = RegisterError;

    fn register_command(
        &mut self,
        name: &'static str,
        help: &'static str,
        handler: Arc<dyn Handler>,
    ) -> Result<(), RegisterError> {
        if self.handlers.contains_key(name) {
            return Err(RegisterError::Duplicate(name));
        }
        self.handlers.insert(name, Registered { help, handler });
        self.command_counts.insert(name, Arc::new(AtomicU64::new(0)));
        Ok(())
    }
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` has a handler.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// `name - help` lines for every registered command, sorted by name.
    pub fn help_lines(&self) -> Vec<String> {
        let mut lines: Vec<_> = self
            .handlers
            .iter()
            .map(|(name, entry)| format!("{name} - {}", entry.help))
            .collect();
        lines.sort();
        lines
    }

    /// Get command usage statistics.
    pub fn command_stats(&self) -> Vec<(&'static str, u64)> {
        let mut stats: Vec<_> = self
            .command_counts
            .iter()
            .map(|(cmd, count)| (*cmd, count.load(Ordering::Relaxed)))
            .filter(|(_, count)| *count > 0) // Only include used commands
            .collect();

        // Sort by usage count (descending), then name for stable output
        stats.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        stats
    }

    /// Dispatch an invocation to the handler registered under `name`.
    ///
    /// Names are matched case-insensitively.
    pub async fn dispatch(
        &self,
        name: &str,
        inv: &Invocation,
        reply: &ReplySink<'_>,
    ) -> HandlerResult {
        let cmd_name = name.to_ascii_lowercase();

        let Some((&key, entry)) = self.handlers.get_key_value(cmd_name.as_str()) else {
            // Typed names are unbounded; keep them out of metric labels.
            crate::metrics::record_command_error(UNKNOWN_COMMAND_LABEL, "unknown_command");
            return Err(HandlerError::UnknownCommand(cmd_name));
        };

        if let Some(counter) = self.command_counts.get(key) {
            counter.fetch_add(1, Ordering::Relaxed);
        }

        let command_span = span!(
            Level::DEBUG,
            "randomizer.command",
            command = %key,
            argc = inv.args.len(),
            public = inv.is_public(),
        );

        let _timer = CommandTimer::new(key);
        let result = entry.handler.handle(inv, reply).instrument(command_span).await;

        if let Err(ref e) = result {
            crate::metrics::record_command_error(key, e.error_code());
            debug!(command = %key, error = %e, "Command error");
        }

        result
    }
}
