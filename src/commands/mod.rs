//! Randomizer command algorithms.
//!
//! Each command is a pure function of the engine and the invocation. Handlers
//! never hold state between calls and never touch the engine other than to draw.
//!
//! - [`choice`]: `shuffle`, `pick`, `magic8`
//! - [`chance`]: `decide`, `flip`, `try`
//! - [`ident`]: `wasteaguid`, `password`

pub mod args;
pub mod chance;
pub mod choice;
pub mod ident;

use crate::engine::RandomEngine;
use crate::error::CommandResult;

/// Signature shared by every command algorithm.
pub type CommandFn = fn(&mut RandomEngine, &Invocation) -> CommandResult;

/// Where a command was posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    /// Host post identifier. Negative ids mark private contexts.
    pub post_id: i64,
}

impl Origin {
    pub fn new(post_id: i64) -> Self {
        Self { post_id }
    }

    /// Whether the reply will be visible to others.
    pub fn is_public(&self) -> bool {
        self.post_id >= 0
    }
}

/// Arguments and origin of a single command invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Argument tokens, command name excluded.
    pub args: Vec<String>,
    pub origin: Option<Origin>,
}

impl Invocation {
    /// Invocation with the given argument tokens and no origin.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            origin: None,
        }
    }

    /// Attach origin metadata.
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    /// True when the origin marks a public post.
    pub fn is_public(&self) -> bool {
        self.origin.is_some_and(|o| o.is_public())
    }
}
