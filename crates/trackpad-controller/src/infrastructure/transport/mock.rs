//! Recording frame writer for tests.
//!
//! Clones share one frame log, so a test can hand one clone to
//! [`OrderedTransport::spawn`](super::OrderedTransport::spawn) and inspect
//! the frames through another.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use trackpad_core::protocol::{decode_frame, Envelope};
use trackpad_core::Command;

use super::{FrameWriter, TransportError};

#[derive(Debug, Clone, Default)]
pub struct RecordingWriter {
    frames: Arc<Mutex<Vec<String>>>,
    fail_open: bool,
    /// Number of frames accepted before every write fails.
    fail_after: Option<usize>,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A writer whose `open` fails.
    pub fn failing_open() -> Self {
        Self {
            fail_open: true,
            ..Self::default()
        }
    }

    /// A writer that accepts `n` frames and then fails.
    pub fn failing_after(n: usize) -> Self {
        Self {
            fail_after: Some(n),
            ..Self::default()
        }
    }

    /// Raw frames written so far.
    pub fn frames(&self) -> Vec<String> {
        self.frames
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Written frames decoded back into envelopes; undecodable frames are skipped.
    pub fn envelopes(&self) -> Vec<Envelope> {
        self.frames()
            .iter()
            .filter_map(|f| decode_frame(f).ok())
            .collect()
    }

    /// Commands carried by the written frames, in write order.
    pub fn commands(&self) -> Vec<Command> {
        self.envelopes().into_iter().map(|e| e.command).collect()
    }
}

#[async_trait]
impl FrameWriter for RecordingWriter {
    async fn open(&mut self) -> Result<(), TransportError> {
        if self.fail_open {
            return Err(TransportError::Open("recording writer set to fail".into()));
        }
        Ok(())
    }

    async fn write_frame(&mut self, frame: &str) -> Result<(), TransportError> {
        let mut frames = self
            .frames
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if self.fail_after.is_some_and(|n| frames.len() >= n) {
            return Err(TransportError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "recording writer set to fail",
            )));
        }
        frames.push(frame.to_owned());
        Ok(())
    }
}
