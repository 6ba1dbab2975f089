//! Transport connection status and its on-screen indicator.
//!
//! The status is pushed by the transport whenever the link changes; this
//! crate never derives or alters it, it only maps each value to a fixed
//! label and color.

use serde::{Deserialize, Serialize};

/// Green used for a live link.
pub const COLOR_CONNECTED: &str = "#22c55e";
/// Amber used while a link is being established.
pub const COLOR_CONNECTING: &str = "#f59e0b";
/// Red used when the link is down.
pub const COLOR_DISCONNECTED: &str = "#ef4444";

/// State of the link to the remote host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Connected,
    Disconnected,
}

/// How a [`ConnectionStatus`] is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusIndicator {
    pub label: &'static str,
    /// CSS-style hex color.
    pub color: &'static str,
    /// Whether the dot animates.
    pub pulse: bool,
}

impl ConnectionStatus {
    pub fn indicator(self) -> StatusIndicator {
        match self {
            ConnectionStatus::Connected => StatusIndicator {
                label: "Connected",
                color: COLOR_CONNECTED,
                pulse: false,
            },
            ConnectionStatus::Connecting => StatusIndicator {
                label: "Connecting...",
                color: COLOR_CONNECTING,
                pulse: true,
            },
            ConnectionStatus::Disconnected => StatusIndicator {
                label: "Disconnected",
                color: COLOR_DISCONNECTED,
                pulse: false,
            },
        }
    }
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConnectionStatus::Connecting => "connecting",
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Disconnected => "disconnected",
        };
        f.write_str(name)
    }
}
