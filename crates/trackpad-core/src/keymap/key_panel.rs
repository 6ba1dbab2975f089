//! Key panel: maps taps on catalog keys to key identifiers.
//!
//! The panel owns one piece of state, the media `is_playing` flag.  It is
//! flipped in the same call that chooses `audioplay` or `audiopause`, so the
//! rendered icon always matches the last identifier returned.
//!
//! The panel knows nothing about modifiers.  Whether a tapped key is sent
//! immediately or folded into a held combo is decided by the caller.

use super::{KeyDef, MEDIA_PAUSE_KEY, MEDIA_TOGGLE_KEY};

/// Icon shown on the media key while playing.
pub const PAUSE_ICON: &str = "⏸";
/// Icon shown on the media key while paused.
pub const PLAY_ICON: &str = "▶";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPanel {
    is_playing: bool,
}

impl KeyPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Returns the identifier to send for a tap on `def`.
    ///
    /// The media toggle alternates `audioplay` / `audiopause`, starting with
    /// `audioplay`; every other key returns its identifier verbatim.
    pub fn tap(&mut self, def: &KeyDef) -> &'static str {
        if def.key != MEDIA_TOGGLE_KEY {
            return def.key;
        }
        let key = if self.is_playing {
            MEDIA_PAUSE_KEY
        } else {
            MEDIA_TOGGLE_KEY
        };
        self.is_playing = !self.is_playing;
        key
    }

    /// Text to draw on `def` given the current media state.
    pub fn display_label(&self, def: &KeyDef) -> &'static str {
        if def.key != MEDIA_TOGGLE_KEY {
            return def.label;
        }
        if self.is_playing {
            PAUSE_ICON
        } else {
            PLAY_ICON
        }
    }
}
