//! Integration test common infrastructure.
//!
//! Builds activated console hosts over deterministic engines and collects
//! their replies.

use slircd_randomizer::config::{PluginConfig, PluginOverrides};
use slircd_randomizer::engine::RandomEngine;
use slircd_randomizer::handlers::{Activation, ReplySink, activate};
use slircd_randomizer::host::ConsoleHost;
use tokio::sync::Mutex;

/// An activated host plus everything it replied.
pub struct TestHost {
    pub host: ConsoleHost,
    pub activation: Activation,
    replies: Mutex<Vec<String>>,
}

impl TestHost {
    /// Activate every default command over `engine`.
    pub fn new(engine: RandomEngine) -> Self {
        Self::with_overrides(engine, PluginOverrides::new())
    }

    pub fn with_overrides(engine: RandomEngine, overrides: PluginOverrides) -> Self {
        let mut host = ConsoleHost::new("!");
        let plugin = PluginConfig::resolve(&overrides);
        let activation = activate(&mut host, &plugin, engine).expect("activation failed");
        Self {
            host,
            activation,
            replies: Mutex::new(Vec::new()),
        }
    }

    /// Feed one line; returns the replies it produced.
    pub async fn say(&self, line: &str) -> Result<Vec<String>, slircd_randomizer::HandlerError> {
        let before = self.replies.lock().await.len();
        self.host
            .handle_line(line, &ReplySink::Capturing(&self.replies))
            .await?;
        Ok(self.replies.lock().await[before..].to_vec())
    }

    /// Every reply produced so far.
    pub async fn all_replies(&self) -> Vec<String> {
        self.replies.lock().await.clone()
    }

    /// Feed one line that must produce exactly one reply.
    pub async fn reply(&self, line: &str) -> String {
        let mut replies = self.say(line).await.expect("command failed");
        assert_eq!(replies.len(), 1, "expected one reply to {line:?}, got {replies:?}");
        replies.remove(0)
    }
}
