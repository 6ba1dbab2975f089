//! Sequence numbers for outbound envelopes.
//!
//! Every frame carries a monotonically increasing `seq`, so the host can
//! detect a dropped or duplicated command and confirm it is executing
//! commands in the order they were produced.
//!
//! The counter is an `AtomicU64`, so a shared reference is enough to draw the
//! next number, even from several tasks.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter starting at 0.  Wraps to 0 after `u64::MAX`.
///
/// ```rust
/// use trackpad_core::protocol::SequenceCounter;
///
/// let counter = SequenceCounter::new();
/// assert_eq!(counter.next(), 0);
/// assert_eq!(counter.next(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SequenceCounter {
    inner: AtomicU64,
}

impl SequenceCounter {
    pub fn new() -> Self {
        Self {
            inner: AtomicU64::new(0),
        }
    }

    /// Returns the next number and advances the counter.
    ///
    /// `Relaxed` is enough: the value orders frames, it does not publish memory.
    pub fn next(&self) -> u64 {
        self.inner.fetch_add(1, Ordering::Relaxed)
    }

    /// The number the next call to [`next`](Self::next) will return.
    pub fn peek(&self) -> u64 {
        self.inner.load(Ordering::Relaxed)
    }
}
