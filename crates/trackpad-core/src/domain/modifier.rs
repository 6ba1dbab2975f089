//! Modifier hold / compose / send state machine.
//!
//! A phone keyboard cannot press two keys at once, so key combinations such
//! as `Ctrl+Shift+T` are composed in steps:
//!
//! ```text
//!            toggle                 key                  toggle
//!  Release ─────────▶ Hold ─────────────────▶ Active ───────────────▶ Release
//!     ▲                │                      │  ▲                  (combo sent)
//!     └────────────────┘                      └──┘
//!        toggle (cancel)                      key (append)
//! ```
//!
//! The state is a sum type, so a non-empty buffer outside `Active` cannot be
//! represented, and [`KeyBuffer`] itself can only be constructed with a first
//! key, so `Active` always holds at least one key.

use tracing::{debug, info};

/// Modifier sent with a combo when none is configured.
pub const DEFAULT_MODIFIER: &str = "ctrl";

/// Ordered, non-empty list of key identifiers captured while a modifier is held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBuffer {
    keys: Vec<String>,
}

impl KeyBuffer {
    /// Creates a buffer holding its first captured key.
    pub fn new(first: impl Into<String>) -> Self {
        Self {
            keys: vec![first.into()],
        }
    }

    /// Appends a key after those already captured.
    pub fn push(&mut self, key: impl Into<String>) {
        self.keys.push(key.into());
    }

    /// Captured keys in capture order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn into_keys(self) -> Vec<String> {
        self.keys
    }

    /// Renders the buffer as `key+key+key` for display.
    pub fn to_text(&self) -> String {
        self.keys.join("+")
    }
}

/// Where the modifier cycle currently is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModifierState {
    /// No modifier engaged; keys are sent as-is.
    #[default]
    Release,
    /// Modifier down, nothing captured yet.
    Hold,
    /// Modifier down with captured keys awaiting send.
    Active(KeyBuffer),
}

impl ModifierState {
    /// `true` in `Hold` and `Active`.
    pub fn is_engaged(&self) -> bool {
        !matches!(self, ModifierState::Release)
    }

    pub fn buffer(&self) -> Option<&KeyBuffer> {
        match self {
            ModifierState::Active(buffer) => Some(buffer),
            _ => None,
        }
    }

    /// Button label for the current state.
    ///
    /// `Release` → "Hold", `Hold` → "Release", `Active` → "Send" when keys
    /// are buffered, otherwise "Release".
    pub fn label(&self) -> &'static str {
        match self {
            ModifierState::Release => "Hold",
            ModifierState::Hold => "Release",
            ModifierState::Active(buffer) if !buffer.is_empty() => "Send",
            ModifierState::Active(_) => "Release",
        }
    }
}

/// Result of pressing the modifier toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// `Release → Hold`.
    Held,
    /// `Hold → Release` with nothing captured.
    Cancelled,
    /// `Active → Release`; the whole buffer must be sent as one combo.
    Flushed { modifier: String, keys: Vec<String> },
}

/// Result of offering a key to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// The key was folded into the buffer and must not be sent on its own.
    Captured,
    /// No modifier is engaged; send the key normally.
    PassThrough,
}

/// Owns the [`ModifierState`] and the modifier a flushed combo is sent with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierBuffer {
    modifier: String,
    state: ModifierState,
}

impl Default for ModifierBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_MODIFIER)
    }
}

impl ModifierBuffer {
    pub fn new(modifier: impl Into<String>) -> Self {
        Self {
            modifier: modifier.into(),
            state: ModifierState::Release,
        }
    }

    pub fn modifier(&self) -> &str {
        &self.modifier
    }

    pub fn state(&self) -> &ModifierState {
        &self.state
    }

    pub fn label(&self) -> &'static str {
        self.state.label()
    }

    /// Buffered keys joined by `+`, or an empty string when nothing is buffered.
    pub fn buffer_text(&self) -> String {
        self.state.buffer().map(KeyBuffer::to_text).unwrap_or_default()
    }

    /// Advances the cycle.  A flush hands over the full buffer in one piece
    /// and leaves the state at `Release`.
    pub fn toggle(&mut self) -> ToggleOutcome {
        match std::mem::take(&mut self.state) {
            ModifierState::Release => {
                self.state = ModifierState::Hold;
                debug!("modifier {} held", self.modifier);
                ToggleOutcome::Held
            }
            ModifierState::Hold => {
                debug!("modifier {} hold cancelled", self.modifier);
                ToggleOutcome::Cancelled
            }
            ModifierState::Active(buffer) => {
                info!("flushing combo {}+{}", self.modifier, buffer.to_text());
                ToggleOutcome::Flushed {
                    modifier: self.modifier.clone(),
                    keys: buffer.into_keys(),
                }
            }
        }
    }

    /// Offers a key identifier to the buffer.
    pub fn capture(&mut self, key: &str) -> CaptureOutcome {
        match &mut self.state {
            ModifierState::Release => return CaptureOutcome::PassThrough,
            ModifierState::Active(buffer) => {
                buffer.push(key);
                debug!("captured {key} ({} buffered)", buffer.len());
                return CaptureOutcome::Captured;
            }
            ModifierState::Hold => {}
        }
        debug!("captured {key}; modifier {} active", self.modifier);
        self.state = ModifierState::Active(KeyBuffer::new(key));
        CaptureOutcome::Captured
    }
}
