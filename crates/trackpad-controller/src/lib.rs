//! trackpad-controller library crate.
//!
//! Wires the pure logic in `trackpad-core` to the outside world: UI events
//! come in, sequenced command frames go out, and the transport's link state
//! comes back for display.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! UI / stdin  (JSON UiEvent lines)
//!         ↓
//! [trackpad-controller]
//!   ├── domain/            UiEvent: the input event vocabulary
//!   ├── application/       CommandDispatcher, ControlBar view
//!   └── infrastructure/
//!         ├── transport/   OrderedTransport: bounded FIFO queue + drain task
//!         └── storage/     TOML configuration
//!         ↓
//! remote host  (newline-delimited JSON envelopes)
//! ```
//!
//! # Layer rules
//!
//! - `domain` and `application` are synchronous and perform no I/O.
//! - `infrastructure` owns every `tokio` type and every file or stream handle.

/// Domain layer: input event types.
pub mod domain;

/// Application layer: intent-to-command dispatch and control bar state.
pub mod application;

/// Infrastructure layer: ordered frame transport and configuration storage.
pub mod infrastructure;
