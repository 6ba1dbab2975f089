//! Static catalog of auxiliary keys shown under the touch surface.
//!
//! Key identifiers are the lowercase names the remote host understands
//! (`"arrowup"`, `"pgdn"`, `"f11"`, …).  The catalog is closed: an identifier
//! that is not in [`KEY_ROWS`] is a programming error, not user input to be
//! validated, so lookups return `Option` rather than an error.
//!
//! Rows can be windowed with [`rows`] so a compact layout can show, say, only
//! the first three rows and a second panel the rest.

pub mod key_panel;

/// Visual category of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyColor {
    #[default]
    Default,
    Modifier,
    Arrow,
    Media,
    Danger,
    Action,
}

/// One entry of the key catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDef {
    /// Text printed on the key.
    pub label: &'static str,
    /// Identifier sent to the host.
    pub key: &'static str,
    pub color: KeyColor,
}

impl KeyDef {
    const fn new(label: &'static str, key: &'static str, color: KeyColor) -> Self {
        Self { label, key, color }
    }

    const fn plain(label: &'static str, key: &'static str) -> Self {
        Self::new(label, key, KeyColor::Default)
    }
}

/// Identifier of the key that toggles media playback.
pub const MEDIA_TOGGLE_KEY: &str = "audioplay";
/// Identifier sent by the media toggle while media is playing.
pub const MEDIA_PAUSE_KEY: &str = "audiopause";

use KeyColor::{Action, Arrow, Danger, Media, Modifier};

/// The full catalog, top row first.
pub static KEY_ROWS: [&[KeyDef]; 6] = [
    &[
        KeyDef::new("Meta", "meta", Modifier),
        KeyDef::new("Alt", "alt", Modifier),
        KeyDef::plain("Space", "space"),
        KeyDef::new("Shift", "shift", Modifier),
        KeyDef::new("▲", "arrowup", Arrow),
        KeyDef::new("⌫", "backspace", Danger),
    ],
    &[
        KeyDef::new("Ctrl", "ctrl", Modifier),
        KeyDef::plain("Menu", "menu"),
        KeyDef::new("PrtSc", "printscreen", Action),
        KeyDef::new("◀", "arrowleft", Arrow),
        KeyDef::new("▼", "arrowdown", Arrow),
        KeyDef::new("▶", "arrowright", Arrow),
    ],
    &[
        KeyDef::plain("Ins", "insert"),
        KeyDef::new("Del", "del", Danger),
        KeyDef::new("🔇", "audiomute", Media),
        KeyDef::new("🔉", "audiovoldown", Media),
        KeyDef::new("🔊", "audiovolup", Media),
        KeyDef::new("⏵", MEDIA_TOGGLE_KEY, Media),
    ],
    &[
        KeyDef::new("Esc", "esc", Action),
        KeyDef::new("Tab", "tab", Action),
        KeyDef::plain("Home", "home"),
        KeyDef::plain("End", "end"),
        KeyDef::plain("PgUp", "pgup"),
        KeyDef::plain("PgDn", "pgdn"),
    ],
    &[
        KeyDef::plain("F1", "f1"),
        KeyDef::plain("F2", "f2"),
        KeyDef::plain("F3", "f3"),
        KeyDef::plain("F4", "f4"),
        KeyDef::plain("F5", "f5"),
        KeyDef::plain("F6", "f6"),
    ],
    &[
        KeyDef::plain("F7", "f7"),
        KeyDef::plain("F8", "f8"),
        KeyDef::plain("F9", "f9"),
        KeyDef::plain("F10", "f10"),
        KeyDef::plain("F11", "f11"),
        KeyDef::plain("F12", "f12"),
    ],
];

/// Returns the rows to display for a `start_row` / `visible_rows` window.
///
/// - `visible_rows = Some(n)`: rows `start_row .. start_row + n`.
/// - `visible_rows = None` and `start_row > 0`: rows `start_row ..`.
/// - otherwise: every row.
///
/// Bounds past the end of the catalog are clamped.
pub fn rows(start_row: usize, visible_rows: Option<usize>) -> &'static [&'static [KeyDef]] {
    let all: &'static [&'static [KeyDef]] = &KEY_ROWS;
    let start = start_row.min(all.len());
    match visible_rows {
        Some(n) => &all[start..start.saturating_add(n).min(all.len())],
        None => &all[start..],
    }
}

/// Looks a key up by identifier.
pub fn find(key: &str) -> Option<&'static KeyDef> {
    KEY_ROWS.iter().flat_map(|row| row.iter()).find(|def| def.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_rows_of_six() {
        assert_eq!(KEY_ROWS.len(), 6);
        assert!(KEY_ROWS.iter().all(|row| row.len() == 6));
    }

    #[test]
    fn test_key_identifiers_are_unique() {
        let mut keys: Vec<&str> = KEY_ROWS.iter().flat_map(|r| r.iter()).map(|d| d.key).collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_rows_without_window_returns_all() {
        assert_eq!(rows(0, None).len(), 6);
    }

    #[test]
    fn test_rows_with_visible_count_slices_window() {
        // Arrange / Act
        let window = rows(1, Some(2));

        // Assert
        assert_eq!(window.len(), 2);
        assert_eq!(window[0][0].key, "ctrl");
        assert_eq!(window[1][0].key, "insert");
    }

    #[test]
    fn test_rows_with_start_only_returns_tail() {
        let tail = rows(4, None);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0][0].key, "f1");
    }

    #[test]
    fn test_rows_clamps_out_of_range_window() {
        assert_eq!(rows(5, Some(10)).len(), 1);
        assert!(rows(99, Some(3)).is_empty());
        assert!(rows(99, None).is_empty());
        assert_eq!(rows(0, Some(usize::MAX)).len(), 6);
    }

    #[test]
    fn test_find_returns_catalog_entry() {
        let def = find("printscreen").expect("printscreen is in the catalog");
        assert_eq!(def.label, "PrtSc");
        assert_eq!(def.color, KeyColor::Action);
    }

    #[test]
    fn test_key_def_is_label_key_and_color_only() {
        let KeyDef { label, key, color } = *find("del").unwrap();
        assert_eq!((label, key, color), ("Del", "del", KeyColor::Danger));
    }

    #[test]
    fn test_find_unknown_key_is_none() {
        assert!(find("hyper").is_none());
    }

    #[test]
    fn test_media_toggle_key_is_in_media_row() {
        let def = find(MEDIA_TOGGLE_KEY).unwrap();
        assert_eq!(def.label, "⏵");
        assert_eq!(def.color, KeyColor::Media);
    }
}
