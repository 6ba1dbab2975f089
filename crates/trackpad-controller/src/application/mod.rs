//! Application layer for trackpad-controller.
//!
//! Synchronous use cases built on the `trackpad-core` domain types.  Nothing
//! here touches `tokio` or performs I/O; commands leave through the
//! [`dispatch::CommandSink`] trait.

pub mod control_bar;
pub mod dispatch;

pub use control_bar::{ControlAction, ControlBar, ControlButton};
pub use dispatch::{CommandDispatcher, CommandSink, DispatcherOptions, Outbox};
