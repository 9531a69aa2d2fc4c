//! Host-facing command handling.
//!
//! This module wires the catalog to a host: activation selects the engine and
//! registers handlers, and the registry dispatches invocations to them.
//!
//! ## Lifecycle
//!
//! 1. [`select_engine`] builds the engine once from the resolved config.
//! 2. [`activate`] registers one [`CommandHandler`] per enabled entry.
//! 3. The host calls [`Registry::dispatch`] (or its own equivalent) per line.

mod activation;
mod command;
pub mod core;

pub use activation::{Activation, activate, select_engine};
pub use command::CommandHandler;
pub use self::core::{CommandHost, Handler, RegisterError, Registry, ReplySink};
