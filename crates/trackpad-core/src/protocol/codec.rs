//! JSON framing for outbound commands.
//!
//! Each command travels inside an [`Envelope`] that adds a protocol version,
//! a sequence number, and a send timestamp:
//!
//! ```text
//! {"version":1,"seq":7,"timestamp_us":1712345678901234,"command":{"kind":"click","button":"left"}}
//! ```
//!
//! A frame is exactly one JSON object on one line; the encoder never emits
//! embedded newlines, so frames can be delimited by `\n`.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::protocol::commands::Command;

/// Version stamped into every envelope.
pub const PROTOCOL_VERSION: u8 = 1;

/// Errors that can occur while encoding or decoding a frame.
#[derive(Debug, Error, PartialEq)]
pub enum ProtocolError {
    /// The frame is not valid JSON or does not describe an envelope.
    #[error("malformed frame: {0}")]
    Malformed(String),

    /// The envelope carries a version this build does not understand.
    #[error("unsupported protocol version: {0}")]
    UnsupportedVersion(u8),
}

/// A sequenced, timestamped command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub version: u8,
    pub seq: u64,
    /// Microseconds since the Unix epoch when the frame was built.
    pub timestamp_us: u64,
    pub command: Command,
}

impl Envelope {
    pub fn new(seq: u64, timestamp_us: u64, command: Command) -> Self {
        Self {
            version: PROTOCOL_VERSION,
            seq,
            timestamp_us,
            command,
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Serializes an envelope into a single-line frame (without the trailing `\n`).
///
/// # Errors
///
/// Returns [`ProtocolError::Malformed`] if serialization fails.
pub fn encode_frame(envelope: &Envelope) -> Result<String, ProtocolError> {
    serde_json::to_string(envelope).map_err(|e| ProtocolError::Malformed(e.to_string()))
}

/// Wraps `command` with `seq` and the current system time, then encodes it.
///
/// # Errors
///
/// Returns [`ProtocolError`] if serialization fails.
pub fn encode_frame_now(command: Command, seq: u64) -> Result<String, ProtocolError> {
    let timestamp_us = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_micros() as u64;
    encode_frame(&Envelope::new(seq, timestamp_us, command))
}

/// Parses one frame.  Surrounding whitespace (including the line terminator)
/// is ignored.
///
/// # Errors
///
/// - [`ProtocolError::Malformed`] for invalid JSON or an unknown command kind.
/// - [`ProtocolError::UnsupportedVersion`] when `version` is not
///   [`PROTOCOL_VERSION`].
pub fn decode_frame(frame: &str) -> Result<Envelope, ProtocolError> {
    let envelope: Envelope =
        serde_json::from_str(frame.trim()).map_err(|e| ProtocolError::Malformed(e.to_string()))?;
    if envelope.version != PROTOCOL_VERSION {
        return Err(ProtocolError::UnsupportedVersion(envelope.version));
    }
    Ok(envelope)
}
