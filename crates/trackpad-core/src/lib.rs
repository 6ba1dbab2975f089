//! # trackpad-core
//!
//! Shared library for the touch trackpad containing the gesture classifier,
//! the modifier hold/compose state machine, the auxiliary key catalog, and
//! the outbound command protocol.
//!
//! This crate has zero dependencies on OS APIs, UI frameworks, async runtimes,
//! or network sockets.  Every operation is synchronous and returns
//! immediately.
//!
//! # Architecture overview (for beginners)
//!
//! The trackpad turns a phone or tablet screen into a remote touchpad and
//! keyboard for another computer.  The touchscreen produces raw finger
//! events; this crate decides what those events *mean* and describes the
//! result as a small set of commands that a transport can carry to the host.
//!
//! - **`domain`** – Pure interaction logic.  The [`GestureClassifier`] turns
//!   touch sequences into cursor deltas, scroll deltas, and taps; the
//!   [`ModifierBuffer`] composes multi-key combinations; [`ConnectionStatus`]
//!   describes the transport link for display.
//!
//! - **`keymap`** – The fixed catalog of auxiliary keys (navigation, function,
//!   media, editing) and the [`KeyPanel`] that owns the media play/pause flag.
//!
//! - **`protocol`** – The [`Command`] vocabulary and the JSON envelope framing
//!   used to ship commands in order.

pub mod domain;
pub mod keymap;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `trackpad_core::GestureClassifier` instead of the full module path.
pub use domain::gesture::{
    GestureClassifier, GestureConfig, GestureMode, Intent, TouchEvent, TouchPhase, TouchPoint,
};
pub use domain::modifier::{
    CaptureOutcome, KeyBuffer, ModifierBuffer, ModifierState, ToggleOutcome,
};
pub use domain::status::{ConnectionStatus, StatusIndicator};
pub use keymap::key_panel::KeyPanel;
pub use keymap::{KeyColor, KeyDef};
pub use protocol::codec::{decode_frame, encode_frame, Envelope, ProtocolError};
pub use protocol::commands::{Command, MouseButton};
