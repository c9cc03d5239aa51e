use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/encore/config.toml` or `~/.config/encore/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ENCORE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerSettings,
    pub ui: UiSettings,
    pub catalog: CatalogSettings,
    pub library: LibrarySettings,
    pub media_keys: MediaKeysSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Output level applied when an album is opened, in `[0, 1]`.
    pub default_volume: f64,
    /// Volume change per `+` / `-` key press.
    pub volume_step: f64,
    /// Number of seconds to scrub when pressing `H` / `L`.
    pub scrub_seconds: u64,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            default_volume: 0.8,
            volume_step: 0.05,
            scrub_seconds: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered in the top border of the album panel.
    pub header_text: String,
    /// Whether the cover art reference is listed with the album details.
    pub show_cover: bool,
    /// Whether mouse capture is enabled (click/hover/drag controls).
    pub mouse: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " encore ".to_string(),
            show_cover: true,
            mouse: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Catalog file to load. Defaults to `albums.toml` next to `config.toml`.
    pub path: Option<PathBuf>,
}

/// Options used when an album is built from a directory (`--dir`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories (multi-disc folders).
    pub recursive: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: true,
            recursive: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MediaKeysSettings {
    /// Publish an MPRIS endpoint so desktop media keys drive the player.
    pub enabled: bool,
}

impl Default for MediaKeysSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}
