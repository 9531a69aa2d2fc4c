//! randomizer - console host for the randomizer commands.
//!
//! Reads chat-style lines from stdin (`!pick 2 red green blue`) and writes the
//! replies to stdout. Takes an optional path to a TOML config file.

use anyhow::Context as _;
use slircd_randomizer::config::Config;
use slircd_randomizer::handlers::{ReplySink, activate, select_engine};
use slircd_randomizer::host::ConsoleHost;
use slircd_randomizer::{metrics, telemetry};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{Instrument, error, info, warn};

/// Outgoing reply queue depth.
const REPLY_CHANNEL_SIZE: usize = 64;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing(std::env::var_os("RANDOMIZER_LOG_JSON").is_some());
    metrics::init();

    // Load configuration
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path).map_err(|e| {
            error!(path = %path, error = %e, "Failed to load config");
            e
        })?,
        None => {
            info!("No config file given, using defaults");
            Config::default()
        }
    };

    let plugin = config.resolved_plugin();
    let engine = select_engine(&plugin, config.engine.seed).context("engine selection failed")?;
    let backend = engine.backend();

    let mut host = ConsoleHost::new(config.host.prefix.clone());
    let activation = activate(&mut host, &plugin, engine).context("command registration failed")?;

    info!(
        host = %config.host.name,
        prefix = %config.host.prefix,
        commands = ?activation.registered(),
        "Starting randomizer"
    );

    // Writer task: replies are printed in the order handlers produce them.
    let (reply_tx, mut reply_rx) = mpsc::channel::<String>(REPLY_CHANNEL_SIZE);
    let name = config.host.name.clone();
    let writer = tokio::spawn(async move {
        while let Some(text) = reply_rx.recv().await {
            println!("<{name}> {text}");
        }
    });

    let session = telemetry::spans::session(&config.host.name, &backend.to_string());
    async {
        let sink = ReplySink::Direct(&reply_tx);
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    error!(error = %e, "Failed to read input");
                    break;
                }
            };
            if let Err(e) = host.handle_line(&line, &sink).await {
                warn!(error = %e, code = e.error_code(), "Command failed");
            }
        }
    }
    .instrument(session)
    .await;

    drop(reply_tx);
    if let Err(e) = writer.await {
        error!(error = %e, "Reply writer task failed");
    }

    for (command, count) in host.registry().command_stats() {
        info!(command, count, "Command usage");
    }
    if config.metrics.dump_on_exit {
        print!("{}", metrics::gather_metrics());
    }

    activation.deactivate();
    info!("Randomizer stopped");
    Ok(())
}
