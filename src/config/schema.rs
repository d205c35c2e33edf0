use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tunesort/config.toml` or `~/.config/tunesort/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TUNESORT__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scan: ScanSettings,
    pub layout: LayoutSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// File suffix (without dot) treated as MP3. Matched case-sensitively.
    pub extension: String,
    /// Whether to follow symlinks during scanning. Loops are detected and skipped.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            extension: "mp3".to_string(),
            follow_links: true,
            include_hidden: true,
        }
    }
}

impl ScanSettings {
    /// The suffix a file name must end with, dot included.
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension.trim_start_matches('.'))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Directory name used when a song has no artist tag.
    pub unknown_artist: String,
    /// Directory name used when a song has no album tag.
    pub unknown_album: String,
    /// File name used when a song has no title tag.
    pub unknown_title: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            unknown_artist: "Unknown Artist".to_string(),
            unknown_album: "Unknown Album".to_string(),
            unknown_title: "Unknown Title".to_string(),
        }
    }
}
