//! Trackpad bridge: entry point.
//!
//! Reads UI events as JSON lines on stdin, runs them through the command
//! dispatcher, and writes sequenced command frames as JSON lines on stdout.
//! Logs go to stderr so stdout carries nothing but frames.
//!
//! # Usage
//!
//! ```text
//! trackpad-bridge [OPTIONS]
//!
//! Options:
//!   --config <PATH>              TOML config file [default: platform config dir]
//!   --scroll                     Start in scroll mode
//!   --jitter-tolerance <PX>      Tap tolerance radius in device pixels
//!   --modifier <KEY>             Modifier sent with combos
//!   --queue-capacity <N>         Commands buffered ahead of the writer
//!   --list-keys                  Print the configured key panel and exit
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable                    | Flag                 |
//! |-----------------------------|----------------------|
//! | `TRACKPAD_CONFIG`           | `--config`           |
//! | `TRACKPAD_SCROLL`           | `--scroll`           |
//! | `TRACKPAD_JITTER_TOLERANCE` | `--jitter-tolerance` |
//! | `TRACKPAD_MODIFIER`         | `--modifier`         |
//! | `TRACKPAD_QUEUE_CAPACITY`   | `--queue-capacity`   |
//!
//! `RUST_LOG` overrides the configured log level.
//!
//! # Example
//!
//! ```text
//! $ echo '{"type":"LeftClick"}' | trackpad-bridge
//! {"version":1,"seq":0,"timestamp_us":1712345678901234,"command":{"kind":"click","button":"left"}}
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use trackpad_controller::application::{CommandDispatcher, Outbox};
use trackpad_controller::domain::UiEvent;
use trackpad_controller::infrastructure::storage::config::{load_config, AppConfig};
use trackpad_controller::infrastructure::transport::{stdio::stdout_writer, OrderedTransport};
use trackpad_core::keymap;
use trackpad_core::KeyPanel;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Touch trackpad bridge.
///
/// Turns touch-surface UI events into remote pointer and keyboard commands.
#[derive(Debug, Parser)]
#[command(
    name = "trackpad-bridge",
    about = "Turns touch-surface UI events on stdin into command frames on stdout",
    version
)]
struct Cli {
    /// Path to a TOML config file.
    ///
    /// When omitted, the platform config directory is searched and a missing
    /// file means built-in defaults.
    #[arg(long, env = "TRACKPAD_CONFIG")]
    config: Option<PathBuf>,

    /// Start in scroll mode instead of cursor mode.
    #[arg(long, env = "TRACKPAD_SCROLL")]
    scroll: bool,

    /// Radius in device pixels inside which finger movement still counts as a tap.
    #[arg(long, env = "TRACKPAD_JITTER_TOLERANCE")]
    jitter_tolerance: Option<i32>,

    /// Modifier key sent with every combo (e.g. `ctrl`, `alt`, `meta`).
    #[arg(long, env = "TRACKPAD_MODIFIER")]
    modifier: Option<String>,

    /// Number of commands buffered ahead of the frame writer.
    #[arg(long, env = "TRACKPAD_QUEUE_CAPACITY")]
    queue_capacity: Option<usize>,

    /// Print the configured key panel rows and exit.
    #[arg(long)]
    list_keys: bool,
}

impl Cli {
    /// Loads the config file and applies command-line overrides on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// final values are out of range.
    fn into_app_config(self) -> anyhow::Result<AppConfig> {
        let mut cfg = load_config(self.config.as_deref()).with_context(|| match &self.config {
            Some(path) => format!("failed to load config from '{}'", path.display()),
            None => "failed to load config from the platform config directory".to_string(),
        })?;

        if self.scroll {
            cfg.controller.start_in_scroll_mode = true;
        }
        if let Some(px) = self.jitter_tolerance {
            cfg.gesture.jitter_tolerance_px = px;
        }
        if let Some(key) = self.modifier {
            cfg.modifier.key = key;
        }
        if let Some(capacity) = self.queue_capacity {
            cfg.transport.queue_capacity = capacity;
        }

        cfg.validate()
            .context("invalid configuration after applying command-line overrides")?;
        Ok(cfg)
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let list_keys = cli.list_keys;
    let config = cli.into_app_config()?;

    // `RUST_LOG` wins; otherwise the configured level.  Logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.controller.log_level)),
        )
        .init();

    if list_keys {
        print_key_panel(&config);
        return Ok(());
    }

    let options = config.dispatcher_options();
    info!(
        "trackpad bridge starting: mode={:?}, jitter={}px, modifier={}, queue={}",
        options.start_mode,
        options.gesture.jitter_tolerance_px,
        options.modifier_key,
        config.transport.queue_capacity
    );

    let transport = OrderedTransport::spawn(stdout_writer(), config.transport.queue_capacity);
    let mut status_rx = transport.subscribe();
    let mut status_open = true;

    let mut dispatcher = CommandDispatcher::new(Outbox::new(), options);
    dispatcher.set_connection_status(transport.status());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    // ── Event loop ────────────────────────────────────────────────────────────
    loop {
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    handle_line(&mut dispatcher, &line);
                    forward(&mut dispatcher, &transport).await;
                }
                Ok(None) => {
                    info!("input closed");
                    break;
                }
                Err(e) => {
                    warn!("failed to read input: {e}");
                    break;
                }
            },

            changed = status_rx.changed(), if status_open => {
                if changed.is_err() {
                    status_open = false;
                }
                let status = *status_rx.borrow_and_update();
                dispatcher.set_connection_status(status);
            }

            signal = &mut shutdown => {
                if let Err(e) = signal {
                    warn!("failed to listen for Ctrl+C: {e}");
                }
                info!("received Ctrl+C; shutting down");
                break;
            }
        }
    }

    let final_status = transport.shutdown().await;
    dispatcher.set_connection_status(final_status);
    info!("trackpad bridge stopped");
    Ok(())
}

/// Parses one input line and feeds it to the dispatcher.  Blank and
/// malformed lines are skipped.
fn handle_line(dispatcher: &mut CommandDispatcher<Outbox>, line: &str) {
    let line = line.trim();
    if line.is_empty() {
        return;
    }
    match serde_json::from_str::<UiEvent>(line) {
        Ok(event) => dispatcher.handle_event(event),
        Err(e) => warn!("ignoring malformed event: {e}"),
    }
}

/// Hands every queued command to the transport, oldest first.
async fn forward(dispatcher: &mut CommandDispatcher<Outbox>, transport: &OrderedTransport) {
    let commands: Vec<_> = dispatcher.sink_mut().drain().collect();
    for command in commands {
        let kind = command.kind();
        if let Err(e) = transport.send(command).await {
            debug!("{kind} command dropped: {e}");
        }
    }
}

fn print_key_panel(config: &AppConfig) {
    let panel = KeyPanel::new();
    for row in keymap::rows(config.key_panel.start_row, config.key_panel.visible_rows) {
        let cells: Vec<String> = row
            .iter()
            .map(|def| format!("{}={}", panel.display_label(def), def.key))
            .collect();
        println!("{}", cells.join("  "));
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
