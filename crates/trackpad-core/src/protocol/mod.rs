//! Outbound command vocabulary and its JSON framing.

pub mod codec;
pub mod commands;
pub mod sequence;

pub use codec::{decode_frame, encode_frame, encode_frame_now, Envelope, ProtocolError, PROTOCOL_VERSION};
pub use commands::{Command, MouseButton};
pub use sequence::SequenceCounter;
