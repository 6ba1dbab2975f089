//! Commands sent to the remote host.
//!
//! One command describes one user action.  Serialized as JSON, each command is
//! an object tagged by a `kind` field:
//!
//! ```text
//! {"kind":"cursorMove","dx":5,"dy":-3}
//! {"kind":"scroll","dx":0,"dy":-40}
//! {"kind":"click","button":"left"}
//! {"kind":"key","id":"arrowup"}
//! {"kind":"comboSend","modifier":"ctrl","keys":["shift","t"]}
//! {"kind":"copy"}
//! {"kind":"paste"}
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::gesture::Intent;

/// Mouse button named by a [`Command::Click`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Left,
    Right,
}

/// A discrete outbound instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Command {
    /// Relative pointer movement in device pixels.
    CursorMove { dx: i32, dy: i32 },
    /// Relative scroll in device pixels.
    Scroll { dx: i32, dy: i32 },
    Click { button: MouseButton },
    /// A single key identifier, e.g. `"esc"` or `"a"`.
    Key { id: String },
    /// `modifier` held while `keys` are pressed in order.
    ComboSend { modifier: String, keys: Vec<String> },
    Copy,
    Paste,
}

impl Command {
    /// The `kind` tag, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Command::CursorMove { .. } => "cursorMove",
            Command::Scroll { .. } => "scroll",
            Command::Click { .. } => "click",
            Command::Key { .. } => "key",
            Command::ComboSend { .. } => "comboSend",
            Command::Copy => "copy",
            Command::Paste => "paste",
        }
    }

    pub fn key(id: impl Into<String>) -> Self {
        Command::Key { id: id.into() }
    }
}

impl From<Intent> for Command {
    /// A tap is a left click.
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::CursorDelta { dx, dy } => Command::CursorMove { dx, dy },
            Intent::ScrollDelta { dx, dy } => Command::Scroll { dx, dy },
            Intent::Tap => Command::Click {
                button: MouseButton::Left,
            },
        }
    }
}
