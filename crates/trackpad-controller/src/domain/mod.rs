//! Domain layer for trackpad-controller.
//!
//! Holds the vocabulary of events a touch UI produces.  No `tokio` types, no
//! I/O, nothing that can block.

pub mod events;

pub use events::UiEvent;
