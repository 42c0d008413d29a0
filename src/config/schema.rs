use serde::{Deserialize, Serialize};

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/cuecut/config.toml` or `~/.config/cuecut/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `CUECUT__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub cue: CueSettings,
    pub library: LibrarySettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CueSettings {
    /// File extensions recognised as cue sheets (case-insensitive, without dot).
    pub extensions: Vec<String>,
}

impl Default for CueSettings {
    fn default() -> Self {
        Self {
            extensions: vec!["cue".into()],
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FragmentDisplayField {
    /// Two-digit track ID.
    #[serde(alias = "track")]
    Id,
    Title,
    Artist,
    /// The sheet title.
    Album,
    /// Media file name without extension.
    Filename,
    Path,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Media file extensions to look for companion sheets next to (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,

    /// Which fields build `Fragment.display` and in what order.
    ///
    /// Example: ["id", "artist", "title"] -> "01 - Artist - Title"
    pub display_fields: Vec<FragmentDisplayField>,
    /// Separator used to join `display_fields`.
    pub display_separator: String,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
            display_fields: vec![
                FragmentDisplayField::Id,
                FragmentDisplayField::Artist,
                FragmentDisplayField::Title,
            ],
            display_separator: " - ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `"info"` or `"cuecut=debug"`.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
