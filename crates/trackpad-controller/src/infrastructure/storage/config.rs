//! TOML configuration for the trackpad bridge.
//!
//! Read from an explicit path, or from the platform config directory:
//! - Windows:  `%APPDATA%\Trackpad\config.toml`
//! - Linux:    `$XDG_CONFIG_HOME/trackpad/config.toml` (or `~/.config/trackpad/`)
//! - macOS:    `~/Library/Application Support/Trackpad/config.toml`
//!
//! ```toml
//! [controller]
//! log_level = "info"
//! start_in_scroll_mode = false
//!
//! [gesture]
//! jitter_tolerance_px = 6
//!
//! [modifier]
//! key = "ctrl"
//!
//! [key_panel]
//! start_row = 0
//! visible_rows = 3
//!
//! [transport]
//! queue_capacity = 256
//! ```
//!
//! Every field has a serde default, so a missing file, a missing section,
//! and a missing key all fall back to the values above (`visible_rows`
//! defaults to unset, meaning "all rows").

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use trackpad_core::domain::gesture::DEFAULT_JITTER_TOLERANCE_PX;
use trackpad_core::domain::modifier::DEFAULT_MODIFIER;
use trackpad_core::{GestureConfig, GestureMode};

use crate::application::DispatcherOptions;
use crate::infrastructure::transport::DEFAULT_QUEUE_CAPACITY;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is out of range.
    #[error("invalid config value: {0}")]
    Invalid(String),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub controller: ControllerConfig,
    #[serde(default)]
    pub gesture: GestureSettings,
    #[serde(default)]
    pub modifier: ModifierSettings,
    #[serde(default)]
    pub key_panel: KeyPanelSettings,
    #[serde(default)]
    pub transport: TransportSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControllerConfig {
    /// `tracing` level used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Start in scroll mode instead of cursor mode.
    #[serde(default)]
    pub start_in_scroll_mode: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureSettings {
    /// Radius in device pixels below which finger movement counts as a tap.
    #[serde(default = "default_jitter_tolerance")]
    pub jitter_tolerance_px: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModifierSettings {
    /// Modifier sent with every combo (`"ctrl"`, `"alt"`, `"meta"`, `"shift"`).
    #[serde(default = "default_modifier")]
    pub key: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KeyPanelSettings {
    /// First catalog row shown.
    #[serde(default)]
    pub start_row: usize,
    /// Number of rows shown; unset shows every row from `start_row`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_rows: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransportSettings {
    /// Commands buffered before the dispatcher waits on the writer.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_jitter_tolerance() -> i32 {
    DEFAULT_JITTER_TOLERANCE_PX
}
fn default_modifier() -> String {
    DEFAULT_MODIFIER.to_string()
}
fn default_queue_capacity() -> usize {
    DEFAULT_QUEUE_CAPACITY
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            start_in_scroll_mode: false,
        }
    }
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            jitter_tolerance_px: default_jitter_tolerance(),
        }
    }
}

impl Default for ModifierSettings {
    fn default() -> Self {
        Self {
            key: default_modifier(),
        }
    }
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            queue_capacity: default_queue_capacity(),
        }
    }
}

impl AppConfig {
    /// Rejects values that parse but cannot work.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gesture.jitter_tolerance_px < 0 {
            return Err(ConfigError::Invalid(format!(
                "gesture.jitter_tolerance_px must be >= 0, got {}",
                self.gesture.jitter_tolerance_px
            )));
        }
        if self.modifier.key.trim().is_empty() {
            return Err(ConfigError::Invalid("modifier.key must not be empty".into()));
        }
        if self.transport.queue_capacity == 0 {
            return Err(ConfigError::Invalid(
                "transport.queue_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Dispatcher start-up settings derived from this config.
    pub fn dispatcher_options(&self) -> DispatcherOptions {
        DispatcherOptions {
            gesture: GestureConfig {
                jitter_tolerance_px: self.gesture.jitter_tolerance_px,
            },
            modifier_key: self.modifier.key.clone(),
            start_mode: if self.controller.start_in_scroll_mode {
                GestureMode::Scroll
            } else {
                GestureMode::Cursor
            },
        }
    }
}

// ── Config loading ────────────────────────────────────────────────────────────

/// Resolves the default config file path for this platform.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the base directory
/// cannot be determined from the environment.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Loads and validates the config.
///
/// With `path = None` the platform default location is used, and a missing
/// platform directory or file yields `AppConfig::default()`.  An explicit
/// path that does not exist is an error.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors, [`ConfigError::Parse`]
/// for malformed TOML, and [`ConfigError::Invalid`] for out-of-range values.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let (path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => match config_file_path() {
            Ok(p) => (p, false),
            Err(_) => return Ok(AppConfig::default()),
        },
    };

    let cfg = match std::fs::read_to_string(&path) {
        Ok(content) => toml::from_str::<AppConfig>(&content)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !explicit => AppConfig::default(),
        Err(e) => return Err(ConfigError::Io { path, source: e }),
    };
    cfg.validate()?;
    Ok(cfg)
}

/// Resolves the platform config base directory including the `Trackpad` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("Trackpad"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("trackpad"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("Trackpad")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
