//! Input events produced by the touch UI.
//!
//! Every event is a JSON object with a `"type"` field naming the variant; the
//! remaining fields sit alongside it:
//!
//! ```json
//! {"type":"Touch","phase":"start","points":[{"id":0,"x":120,"y":300,"timestamp_ms":16}]}
//! {"type":"ToggleScroll"}
//! {"type":"LeftClick"}
//! {"type":"ModifierToggle"}
//! {"type":"KeyTap","key":"arrowup"}
//! {"type":"KeyPress","id":"a"}
//! ```
//!
//! `KeyTap` names a key from the auxiliary key catalog; `KeyPress` carries a
//! key identifier typed on the soft keyboard.

use serde::{Deserialize, Serialize};
use trackpad_core::{TouchEvent, TouchPhase, TouchPoint};

/// One discrete UI event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiEvent {
    /// Raw finger input on the touch surface.
    Touch {
        phase: TouchPhase,
        /// Fingers that changed in this event.
        points: Vec<TouchPoint>,
    },

    /// Cursor / Scroll button.
    ToggleScroll,

    LeftClick,
    RightClick,
    Copy,
    Paste,

    /// Modifier Hold / Release / Send button.
    ModifierToggle,

    /// Keyboard button; shows or hides the soft keyboard.
    KeyboardToggle,

    /// Tap on a key from the auxiliary key panel.
    KeyTap {
        /// Catalog identifier, e.g. `"pgdn"`.
        key: String,
    },

    /// Key typed on the soft keyboard.
    KeyPress { id: String },
}

impl UiEvent {
    /// Returns the raw touch event when this is a `Touch` variant.
    pub fn touch_event(&self) -> Option<TouchEvent> {
        match self {
            UiEvent::Touch { phase, points } => Some(TouchEvent {
                phase: *phase,
                points: points.clone(),
            }),
            _ => None,
        }
    }
}

impl From<TouchEvent> for UiEvent {
    fn from(event: TouchEvent) -> Self {
        UiEvent::Touch {
            phase: event.phase,
            points: event.points,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
