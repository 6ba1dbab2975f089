//! Infrastructure layer for trackpad-controller.
//!
//! Contains the I/O-facing adapters: the ordered frame transport and the
//! configuration file loader.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `trackpad_core`, but MUST NOT be imported by the `application` or domain
//! layers.

pub mod storage;
pub mod transport;
