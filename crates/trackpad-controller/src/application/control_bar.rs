//! View model for the row of control buttons under the touch surface.
//!
//! The bar is rebuilt from dispatcher state after every event; it holds no
//! state of its own.  Each button carries the [`ControlAction`] it triggers,
//! so no button (Copy and Paste included) can be drawn without a handler.

use trackpad_core::{GestureMode, ModifierState};

use crate::domain::UiEvent;

/// Accent of the Cursor/Scroll button while scrolling.
pub const COLOR_SCROLL_ACTIVE: &str = "#3b82f6";
/// Accent of the modifier button when a combo is ready to send.
pub const COLOR_MODIFIER_READY: &str = "#10b981";
/// Accent of the modifier button while holding with nothing to send.
pub const COLOR_MODIFIER_PENDING: &str = "#f59e0b";

/// What pressing a control button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlAction {
    ToggleScroll,
    LeftClick,
    RightClick,
    Copy,
    Paste,
    ModifierToggle,
    KeyboardToggle,
}

impl ControlAction {
    /// The UI event a press produces.
    pub fn event(self) -> UiEvent {
        match self {
            ControlAction::ToggleScroll => UiEvent::ToggleScroll,
            ControlAction::LeftClick => UiEvent::LeftClick,
            ControlAction::RightClick => UiEvent::RightClick,
            ControlAction::Copy => UiEvent::Copy,
            ControlAction::Paste => UiEvent::Paste,
            ControlAction::ModifierToggle => UiEvent::ModifierToggle,
            ControlAction::KeyboardToggle => UiEvent::KeyboardToggle,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlButton {
    pub action: ControlAction,
    pub label: &'static str,
    /// Small second line under the label.
    pub sublabel: Option<&'static str>,
    /// Text glyph drawn instead of a vector icon.
    pub glyph: Option<&'static str>,
    /// Highlighted.
    pub active: bool,
    /// Highlight color while active.
    pub accent: Option<&'static str>,
}

impl ControlButton {
    fn plain(action: ControlAction, label: &'static str) -> Self {
        Self {
            action,
            label,
            sublabel: None,
            glyph: None,
            active: false,
            accent: None,
        }
    }
}

/// The seven control buttons, left to right, plus the modifier buffer text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlBar {
    pub buttons: [ControlButton; 7],
    /// Buffered combo keys joined by `+`.
    pub buffer_text: String,
}

impl ControlBar {
    pub fn build(mode: GestureMode, modifier: &ModifierState, keyboard_open: bool) -> Self {
        let scrolling = mode == GestureMode::Scroll;
        let toggle = ControlButton {
            active: scrolling,
            accent: Some(COLOR_SCROLL_ACTIVE),
            ..ControlButton::plain(
                ControlAction::ToggleScroll,
                if scrolling { "Scroll" } else { "Cursor" },
            )
        };

        let keyboard = ControlButton {
            active: keyboard_open,
            ..ControlButton::plain(ControlAction::KeyboardToggle, "Keyboard")
        };

        Self {
            buttons: [
                toggle,
                ControlButton::plain(ControlAction::LeftClick, "L-Click"),
                ControlButton::plain(ControlAction::RightClick, "R-Click"),
                ControlButton::plain(ControlAction::Copy, "Copy"),
                ControlButton::plain(ControlAction::Paste, "Paste"),
                modifier_button(modifier),
                keyboard,
            ],
            buffer_text: modifier.buffer().map(|b| b.to_text()).unwrap_or_default(),
        }
    }

    pub fn button(&self, action: ControlAction) -> Option<&ControlButton> {
        self.buttons.iter().find(|b| b.action == action)
    }
}

fn modifier_button(state: &ModifierState) -> ControlButton {
    let has_keys = state.buffer().is_some_and(|b| !b.is_empty());
    let engaged = state.is_engaged();

    let glyph = match state {
        ModifierState::Active(_) if has_keys => "⚡",
        ModifierState::Active(_) => "◉",
        ModifierState::Hold => "⏻",
        ModifierState::Release => "⊕",
    };

    ControlButton {
        action: ControlAction::ModifierToggle,
        label: state.label(),
        sublabel: engaged.then_some("MOD"),
        glyph: Some(glyph),
        active: engaged,
        accent: Some(if has_keys {
            COLOR_MODIFIER_READY
        } else {
            COLOR_MODIFIER_PENDING
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
