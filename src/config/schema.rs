use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/playlist-manager/config.toml`
/// or `~/.config/playlist-manager/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `PLAYLIST_MANAGER__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub playback: PlaybackSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Folder holding one `<name>.txt` file per playlist.
    /// Relative paths resolve against the current working directory.
    pub folder: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("playlists"),
        }
    }
}

impl StorageSettings {
    /// The storage folder anchored at `cwd` when it is relative.
    pub fn resolve(&self, cwd: &Path) -> PathBuf {
        if self.folder.is_absolute() {
            self.folder.clone()
        } else {
            cwd.join(&self.folder)
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Block for each track's duration while "playing" it.
    /// Set to false to print the playback log without waiting.
    pub realtime: bool,
    /// Pause after each track (milliseconds). Only applies when `realtime` is set.
    pub pause_between_ms: u64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            realtime: true,
            pause_between_ms: 500,
        }
    }
}

impl PlaybackSettings {
    /// Pacing that never sleeps.
    pub fn instant() -> Self {
        Self {
            realtime: false,
            pause_between_ms: 0,
        }
    }

    pub fn pause_between(&self) -> Duration {
        Duration::from_millis(self.pause_between_ms)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// One of `trace`, `debug`, `info`, `warn`, `error`. `RUST_LOG` wins when set.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
