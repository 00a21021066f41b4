//! Persisted user preferences.
//!
//! The dashboard keeps exactly one piece of persistent state: the dark-mode
//! boolean, stored as a small TOML file in the platform config directory.
//! It is read once at startup and written on toggle.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ThemePrefs {
    pub dark_mode: bool,
}

impl ThemePrefs {
    /// Default location of the preference file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fleetpulse").join("theme.toml"))
    }

    /// Load preferences from a file.
    ///
    /// A missing or unreadable file yields the default (dark mode off);
    /// the preference is a convenience, never an error source.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Persist preferences, creating parent directories as needed.
    pub fn store_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Flip the preference and persist it.
    pub fn toggle(&mut self, path: &Path) -> Result<(), ConfigError> {
        self.dark_mode = !self.dark_mode;
        self.store_to(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_default() {
        let prefs = ThemePrefs::load_from(Path::new("/nonexistent/theme.toml"));
        assert!(!prefs.dark_mode);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("theme.toml");

        let prefs = ThemePrefs { dark_mode: true };
        prefs.store_to(&path).unwrap();

        assert_eq!(ThemePrefs::load_from(&path), prefs);
    }

    #[test]
    fn test_toggle_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");

        let mut prefs = ThemePrefs::default();
        prefs.toggle(&path).unwrap();
        assert!(prefs.dark_mode);
        assert!(ThemePrefs::load_from(&path).dark_mode);

        prefs.toggle(&path).unwrap();
        assert!(!ThemePrefs::load_from(&path).dark_mode);
    }

    #[test]
    fn test_garbage_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        std::fs::write(&path, "not valid toml {{{").unwrap();

        assert!(!ThemePrefs::load_from(&path).dark_mode);
    }
}
