//! CommandDispatcher: turns UI events into outbound commands.
//!
//! The dispatcher is the single owner of every piece of interaction state:
//! the gesture classifier (and through it the active gesture session), the
//! modifier buffer, the key panel's media flag, the soft keyboard flag, and
//! the last connection status reported by the transport.
//!
//! # Emission rules
//!
//! - Every resolved intent produces exactly one [`Command`], emitted to the
//!   [`CommandSink`] before the handler returns.
//! - Commands are emitted in the order events are handled.  Nothing is
//!   batched, merged, or reordered here.
//! - Key identifiers (from the key panel or the soft keyboard) are offered to
//!   the modifier buffer first.  While a modifier is held they are captured
//!   instead of sent; the whole capture goes out as one `comboSend` when the
//!   modifier button is pressed again.
//!
//! # Architecture
//!
//! The dispatcher is synchronous and depends only on the [`CommandSink`]
//! trait.  The binary plugs in an [`Outbox`] that is drained into the async
//! transport after each event; tests plug in a plain `Vec<Command>`.

use std::collections::VecDeque;

use tracing::{debug, info, warn};
use trackpad_core::{
    domain::modifier::DEFAULT_MODIFIER,
    keymap::{self, KeyDef},
    CaptureOutcome, Command, ConnectionStatus, GestureClassifier, GestureConfig, GestureMode,
    Intent, KeyPanel, ModifierBuffer, ModifierState, MouseButton, StatusIndicator, ToggleOutcome,
    TouchEvent,
};

use crate::application::control_bar::ControlBar;
use crate::domain::UiEvent;

// ── Sink ──────────────────────────────────────────────────────────────────────

/// Receives commands in emission order.
pub trait CommandSink {
    fn emit(&mut self, command: Command);
}

impl CommandSink for Vec<Command> {
    fn emit(&mut self, command: Command) {
        self.push(command);
    }
}

/// FIFO buffer of commands awaiting hand-off to the transport.
#[derive(Debug, Default)]
pub struct Outbox {
    queue: VecDeque<Command>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Removes and yields every queued command, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = Command> + '_ {
        self.queue.drain(..)
    }
}

impl CommandSink for Outbox {
    fn emit(&mut self, command: Command) {
        self.queue.push_back(command);
    }
}

// ── Options ───────────────────────────────────────────────────────────────────

/// Start-up settings for a [`CommandDispatcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherOptions {
    pub gesture: GestureConfig,
    /// Modifier sent with every combo.
    pub modifier_key: String,
    pub start_mode: GestureMode,
}

impl Default for DispatcherOptions {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            modifier_key: DEFAULT_MODIFIER.to_string(),
            start_mode: GestureMode::Cursor,
        }
    }
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

pub struct CommandDispatcher<S: CommandSink> {
    classifier: GestureClassifier,
    modifier: ModifierBuffer,
    key_panel: KeyPanel,
    keyboard_open: bool,
    status: ConnectionStatus,
    sink: S,
}

impl<S: CommandSink> CommandDispatcher<S> {
    pub fn new(sink: S, options: DispatcherOptions) -> Self {
        let mut classifier = GestureClassifier::new(options.gesture);
        classifier.set_mode(options.start_mode);
        Self {
            classifier,
            modifier: ModifierBuffer::new(options.modifier_key),
            key_panel: KeyPanel::new(),
            keyboard_open: false,
            status: ConnectionStatus::Connecting,
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    // ── Touch surface ─────────────────────────────────────────────────────────

    /// Classifies a raw touch event and emits the resulting command, if any.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> Option<Intent> {
        let intent = self.classifier.handle(event)?;
        self.emit(Command::from(intent));
        Some(intent)
    }

    /// Flips cursor / scroll mode.  A gesture in progress keeps its mode.
    pub fn toggle_scroll_mode(&mut self) -> GestureMode {
        let mode = self.classifier.toggle_mode();
        debug!("gesture mode now {mode:?}");
        mode
    }

    pub fn mode(&self) -> GestureMode {
        self.classifier.mode()
    }

    /// `true` while a finger is on the surface.
    pub fn is_tracking(&self) -> bool {
        self.classifier.is_tracking()
    }

    // ── Buttons ───────────────────────────────────────────────────────────────

    pub fn left_click(&mut self) {
        self.emit(Command::Click {
            button: MouseButton::Left,
        });
    }

    pub fn right_click(&mut self) {
        self.emit(Command::Click {
            button: MouseButton::Right,
        });
    }

    pub fn copy(&mut self) {
        self.emit(Command::Copy);
    }

    pub fn paste(&mut self) {
        self.emit(Command::Paste);
    }

    /// Advances the modifier cycle; flushing emits one `comboSend`.
    pub fn toggle_modifier(&mut self) -> &ModifierState {
        if let ToggleOutcome::Flushed { modifier, keys } = self.modifier.toggle() {
            self.emit(Command::ComboSend { modifier, keys });
        }
        self.modifier.state()
    }

    /// Shows or hides the soft keyboard and returns the new state.
    pub fn toggle_keyboard(&mut self) -> bool {
        self.keyboard_open = !self.keyboard_open;
        self.keyboard_open
    }

    pub fn keyboard_open(&self) -> bool {
        self.keyboard_open
    }

    // ── Keys ──────────────────────────────────────────────────────────────────

    /// Handles a tap on a key-panel key.
    pub fn tap_key(&mut self, def: &KeyDef) {
        let id = self.key_panel.tap(def);
        self.send_key(id);
    }

    /// Handles a key typed on the soft keyboard.
    pub fn press_key(&mut self, id: &str) {
        self.send_key(id);
    }

    fn send_key(&mut self, id: &str) {
        match self.modifier.capture(id) {
            CaptureOutcome::Captured => {}
            CaptureOutcome::PassThrough => self.emit(Command::key(id)),
        }
    }

    pub fn modifier_state(&self) -> &ModifierState {
        self.modifier.state()
    }

    pub fn key_panel(&self) -> &KeyPanel {
        &self.key_panel
    }

    // ── Connection status ─────────────────────────────────────────────────────

    /// Records the transport's latest status.
    pub fn set_connection_status(&mut self, status: ConnectionStatus) {
        if status != self.status {
            info!("connection status: {} -> {}", self.status, status);
            self.status = status;
        }
    }

    pub fn connection_status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn status_indicator(&self) -> StatusIndicator {
        self.status.indicator()
    }

    /// Current control bar view.
    pub fn control_bar(&self) -> ControlBar {
        ControlBar::build(self.mode(), self.modifier.state(), self.keyboard_open)
    }

    // ── Event entry point ─────────────────────────────────────────────────────

    /// Routes one UI event to the matching handler.
    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Touch { phase, points } => {
                self.handle_touch(&TouchEvent { phase, points });
            }
            UiEvent::ToggleScroll => {
                self.toggle_scroll_mode();
            }
            UiEvent::LeftClick => self.left_click(),
            UiEvent::RightClick => self.right_click(),
            UiEvent::Copy => self.copy(),
            UiEvent::Paste => self.paste(),
            UiEvent::ModifierToggle => {
                self.toggle_modifier();
            }
            UiEvent::KeyboardToggle => {
                self.toggle_keyboard();
            }
            UiEvent::KeyTap { key } => match keymap::find(&key) {
                Some(def) => self.tap_key(def),
                None => warn!("key tap for {key:?} is not in the key catalog; ignored"),
            },
            UiEvent::KeyPress { id } => self.press_key(&id),
        }
    }

    fn emit(&mut self, command: Command) {
        debug!("emit {}", command.kind());
        self.sink.emit(command);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
