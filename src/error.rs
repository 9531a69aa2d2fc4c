//! Unified error handling for the randomizer.
//!
//! Engine failures, command failures and dispatch failures each get their own
//! enum. Every dispatch-level error carries a static code used as a metrics label.

use thiserror::Error;
use tokio::sync::mpsc;

// ============================================================================
// Engine Errors (entropy backends)
// ============================================================================

/// Failures raised by an entropy backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(String),
}

impl From<rand::Error> for EngineError {
    fn from(err: rand::Error) -> Self {
        Self::EntropyUnavailable(err.to_string())
    }
}

// ============================================================================
// Command Errors (handler algorithms)
// ============================================================================

/// Errors produced by a command algorithm.
///
/// A failed command never produces a reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Sampling without replacement was asked for more items than exist.
    #[error("cannot pick {requested} items from {available}")]
    InvalidArgument { requested: usize, available: usize },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl CommandError {
    /// Get a static error code string for metrics labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::Engine(_) => "engine_failure",
        }
    }
}

/// Result type for command algorithms: the reply text or the failure.
pub type CommandResult = Result<String, CommandError>;

// ============================================================================
// Handler Errors (dispatch)
// ============================================================================

/// Errors that can occur while dispatching a command to its handler.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("send error: {0}")]
    Send(#[from] mpsc::error::SendError<String>),
}

impl HandlerError {
    /// Get a static error code string for metrics labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Command(e) => e.error_code(),
            Self::UnknownCommand(_) => "unknown_command",
            Self::Send(_) => "send_error",
        }
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;
