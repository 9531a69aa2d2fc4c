//! Handler and host traits.
//!
//! - [`Handler`]: one registered command, run per invocation.
//! - [`CommandHost`]: the host's registration interface. Activation calls
//!   `register_command` once per enabled catalog entry.

use super::middleware::ReplySink;
use crate::commands::Invocation;
use crate::error::HandlerResult;
use async_trait::async_trait;
use std::sync::Arc;

/// A command handler.
///
/// A handler replies through `reply` at most once. When the command fails it
/// returns the error and sends nothing.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, inv: &Invocation, reply: &ReplySink<'_>) -> HandlerResult;
}

/// Host-side command registration.
///
/// Failures are the host's own; activation hands them back unchanged.
pub trait CommandHost {
    type Error;

    fn register_command(
        &mut self,
        name: &'static str,
        help: &'static str,
        handler: Arc<dyn Handler>,
    ) -> Result<(), Self::Error>;
}
