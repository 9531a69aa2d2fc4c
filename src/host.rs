//! Console host: turns chat-style lines into command invocations.
//!
//! A line is a command when it starts with the configured prefix (`!pick 2 a b c`).
//! The first word after the prefix is the command name; the rest are argument
//! tokens. A leading `@public` marker posts the command publicly, which only
//! changes the wording of `password`.

use crate::commands::{Invocation, Origin};
use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{CommandHost, Handler, RegisterError, Registry, ReplySink};
use std::sync::Arc;

/// Marker that makes a line count as a public post.
pub const PUBLIC_MARKER: &str = "@public";

/// Help reply when nothing is registered.
pub const NO_COMMANDS_REPLY: &str = "No commands are registered.";

/// Post id given to public lines.
const PUBLIC_POST_ID: i64 = 0;
/// Post id given to private lines.
const PRIVATE_POST_ID: i64 = -1;

/// A command line split into name and invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Lowercased command name.
    pub name: String,
    pub invocation: Invocation,
}

/// Parse `line` as a command. Returns `None` for ordinary chat.
pub fn parse_line(line: &str, prefix: &str) -> Option<ParsedLine> {
    let mut rest = line.trim();
    let mut post_id = PRIVATE_POST_ID;
    if let Some(stripped) = rest.strip_prefix(PUBLIC_MARKER)
        && stripped.starts_with(char::is_whitespace)
    {
        rest = stripped.trim_start();
        post_id = PUBLIC_POST_ID;
    }

    let body = rest.strip_prefix(prefix)?;
    let mut words = body.split_whitespace();
    let name = words.next()?.to_ascii_lowercase();
    let invocation = Invocation::new(words).with_origin(Origin::new(post_id));
    Some(ParsedLine { name, invocation })
}

/// Line-oriented host over an in-process [`Registry`].
pub struct ConsoleHost {
    prefix: String,
    registry: Registry,
}

impl ConsoleHost {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            registry: Registry::new(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Handle one input line.
    ///
    /// Non-command lines are ignored. `help` lists registered commands unless a
    /// command of that name exists. Unknown commands get a notice reply. Command
    /// failures are returned without any reply.
    pub async fn handle_line(&self, line: &str, reply: &ReplySink<'_>) -> HandlerResult {
        let Some(parsed) = parse_line(line, &self.prefix) else {
            return Ok(());
        };

        if parsed.name == "help" && !self.registry.contains("help") {
            let lines = self.registry.help_lines();
            let text = if lines.is_empty() {
                NO_COMMANDS_REPLY.to_string()
            } else {
                lines.join("\n")
            };
            reply.send(text).await?;
            return Ok(());
        }

        match self
            .registry
            .dispatch(&parsed.name, &parsed.invocation, reply)
            .await
        {
            Err(HandlerError::UnknownCommand(name)) => {
                reply
                    .send(format!(
                        "Unknown command: {name}. Use {}help for a list of commands.",
                        self.prefix
                    ))
                    .await?;
                Ok(())
            }
            other => other,
        }
    }
}

impl CommandHost for ConsoleHost {
    type Error = RegisterError;

    fn register_command(
        &mut self,
        name: &'static str,
        help: &'static str,
        handler: Arc<dyn Handler>,
    ) -> Result<(), RegisterError> {
        self.registry.register_command(name, help, handler)
    }
}
