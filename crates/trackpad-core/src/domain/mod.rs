//! Domain entities for the touch trackpad.
//!
//! This module contains pure interaction logic with no infrastructure
//! dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! Clean Architecture organises code into concentric layers.  The innermost
//! layer is called the **domain**.  Domain code:
//!
//! - Contains the core rules of the application.
//! - Has **no** imports from OS APIs, network libraries, or UI frameworks.
//! - Can be compiled and tested on any platform without any external setup.
//!
//! Here the rules are: how a stream of finger events becomes a cursor
//! movement, a scroll, or a click; how a held modifier collects keys into a
//! combination; and how the transport's link state is presented.

/// Touch-sequence classification into cursor, scroll, and tap intents.
pub mod gesture;

/// The Release / Hold / Active modifier composition state machine.
pub mod modifier;

/// Connection status reported by the transport.
pub mod status;
