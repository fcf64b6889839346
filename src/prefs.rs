//! Persisted UI preferences and data-directory paths
//!
//! Preferences live in `~/.twosum-tty/prefs.toml`. They are a convenience:
//! a missing or unreadable file never stops the program.

use crate::listing::Language;
use crate::playback::PlaybackRate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse preferences: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Settings remembered between runs
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub playback_rate: PlaybackRate,
    pub language: Language,
}

impl Preferences {
    /// Read preferences from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, PrefsError> {
        if !path.exists() {
            return Ok(Preferences::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Like [`Preferences::load`], but logs failures and falls back to defaults
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable preferences");
                Preferences::default()
            }
        }
    }

    /// Write preferences to `path`, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<(), PrefsError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, toml::to_string(self)?)?;
        tracing::debug!(path = %path.display(), "Saved preferences");
        Ok(())
    }
}

/// Base data directory (`~/.twosum-tty`)
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".twosum-tty"))
        .unwrap_or_else(|| PathBuf::from(".twosum-tty"))
}

/// Default preferences file (`~/.twosum-tty/prefs.toml`)
pub fn prefs_path() -> PathBuf {
    data_dir().join("prefs.toml")
}

/// Log directory (`~/.twosum-tty/logs`)
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Log file (`~/.twosum-tty/logs/twosum-tty.log`)
pub fn log_file_path() -> PathBuf {
    logs_dir().join("twosum-tty.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.toml");
        let prefs = Preferences {
            playback_rate: PlaybackRate::OneAndHalf,
            language: Language::Go,
        };

        prefs.save(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("playback_rate = 1.5"));
        assert!(contents.contains("language = \"go\""));

        assert_eq!(Preferences::load(&path).unwrap(), prefs);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "language = \"python\"\n").unwrap();

        let prefs = Preferences::load(&path).unwrap();
        assert_eq!(prefs.language, Language::Python);
        assert_eq!(prefs.playback_rate, PlaybackRate::Normal);
    }

    #[test]
    fn test_bad_rate_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "playback_rate = 1.1\n").unwrap();

        assert!(matches!(Preferences::load(&path), Err(PrefsError::Parse(_))));
        assert_eq!(Preferences::load_or_default(&path), Preferences::default());
    }
}
