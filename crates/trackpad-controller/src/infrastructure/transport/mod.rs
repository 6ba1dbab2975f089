//! Ordered delivery of commands to the remote host.
//!
//! The dispatcher emits commands synchronously, but writing a frame is
//! asynchronous and can be slow.  [`OrderedTransport`] sits between the two:
//!
//! ```text
//! dispatcher ──send()──▶ bounded mpsc queue ──▶ drain task ──▶ FrameWriter
//!                                                   │
//!                        status() ◀── watch ◀───────┘
//! ```
//!
//! A single drain task owns the writer and takes commands off the queue one
//! at a time, so frames are written strictly in the order they were sent.
//! The queue is bounded: when the writer falls behind, `send` waits instead
//! of buffering without limit.
//!
//! # Connection status
//!
//! The drain task publishes a [`ConnectionStatus`] on a `tokio::sync::watch`
//! channel: `Connecting` until the writer opens, `Connected` while frames are
//! flowing, `Disconnected` after an open or write failure or once the queue is
//! closed.  There is no reconnect; a failed transport stays disconnected and
//! further sends return [`TransportError::Closed`].

pub mod mock;
pub mod stdio;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use trackpad_core::protocol::{encode_frame_now, SequenceCounter};
use trackpad_core::{Command, ConnectionStatus};

/// Default number of commands the queue holds before `send` waits.
pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

/// Errors raised by the transport layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The underlying channel could not be opened.
    #[error("failed to open transport: {0}")]
    Open(String),

    /// Writing a frame failed.
    #[error("I/O error writing frame: {0}")]
    Io(#[from] std::io::Error),

    /// The drain task has stopped; nothing more can be sent.
    #[error("transport is closed")]
    Closed,
}

/// Destination for encoded frames.
///
/// Production code writes newline-delimited frames to a byte stream
/// ([`stdio::LineWriter`]); tests record them ([`mock::RecordingWriter`]).
#[async_trait]
pub trait FrameWriter: Send {
    /// Establishes the channel.  Called once before the first frame.
    async fn open(&mut self) -> Result<(), TransportError> {
        Ok(())
    }

    /// Writes one frame.  `frame` never contains a newline.
    async fn write_frame(&mut self, frame: &str) -> Result<(), TransportError>;
}

/// Handle to a running transport.
pub struct OrderedTransport {
    tx: mpsc::Sender<Command>,
    status: watch::Receiver<ConnectionStatus>,
    task: JoinHandle<()>,
}

impl OrderedTransport {
    /// Starts the drain task for `writer` with a queue of `capacity` commands.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn<W>(writer: W, capacity: usize) -> Self
    where
        W: FrameWriter + 'static,
    {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let (status_tx, status_rx) = watch::channel(ConnectionStatus::Connecting);
        let task = tokio::spawn(drain(writer, rx, status_tx));
        Self {
            tx,
            status: status_rx,
            task,
        }
    }

    /// Queues `command`, waiting while the queue is full.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Closed`] once the drain task has stopped.
    pub async fn send(&self, command: Command) -> Result<(), TransportError> {
        self.tx.send(command).await.map_err(|_| TransportError::Closed)
    }

    /// Latest published status.
    pub fn status(&self) -> ConnectionStatus {
        *self.status.borrow()
    }

    /// A receiver that wakes on every status change.
    pub fn subscribe(&self) -> watch::Receiver<ConnectionStatus> {
        self.status.clone()
    }

    /// Closes the queue, waits for queued commands to be written, and
    /// returns the final status.
    pub async fn shutdown(self) -> ConnectionStatus {
        let Self { tx, status, task } = self;
        drop(tx);
        if let Err(e) = task.await {
            warn!("transport drain task ended abnormally: {e}");
        }
        let final_status = *status.borrow();
        final_status
    }
}

async fn drain<W: FrameWriter>(
    mut writer: W,
    mut rx: mpsc::Receiver<Command>,
    status: watch::Sender<ConnectionStatus>,
) {
    if let Err(e) = writer.open().await {
        warn!("transport open failed: {e}");
        status.send_replace(ConnectionStatus::Disconnected);
        return;
    }
    status.send_replace(ConnectionStatus::Connected);

    let seq = SequenceCounter::new();
    while let Some(command) = rx.recv().await {
        let n = seq.next();
        let kind = command.kind();
        let frame = match encode_frame_now(command, n) {
            Ok(frame) => frame,
            Err(e) => {
                warn!("dropping {kind} command {n}: {e}");
                continue;
            }
        };
        if let Err(e) = writer.write_frame(&frame).await {
            warn!("write of {kind} frame {n} failed: {e}");
            status.send_replace(ConnectionStatus::Disconnected);
            return;
        }
        trace!("wrote {kind} frame {n}");
    }

    debug!("command queue closed after {} frames", seq.peek());
    status.send_replace(ConnectionStatus::Disconnected);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
