//! Theme command handlers

use crate::cli::{ThemeAction, ThemeArgs};
use crate::prefs::ThemePrefs;
use anyhow::Context;

fn describe(prefs: &ThemePrefs) -> &'static str {
    if prefs.dark_mode {
        "dark"
    } else {
        "light"
    }
}

/// Handle `fleetpulse theme` and return the line to print.
pub fn handle_theme(args: &ThemeArgs) -> anyhow::Result<String> {
    let path = args
        .file
        .clone()
        .or_else(ThemePrefs::default_path)
        .context("no config directory available for the theme preference")?;

    let mut prefs = ThemePrefs::load_from(&path);

    match args.action {
        ThemeAction::Status => Ok(format!("theme: {}", describe(&prefs))),
        ThemeAction::Dark => {
            prefs.dark_mode = true;
            prefs.store_to(&path)?;
            Ok("theme set to dark".to_string())
        }
        ThemeAction::Light => {
            prefs.dark_mode = false;
            prefs.store_to(&path)?;
            Ok("theme set to light".to_string())
        }
        ThemeAction::Toggle => {
            prefs.toggle(&path)?;
            Ok(format!("theme toggled to {}", describe(&prefs)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(action: ThemeAction, file: PathBuf) -> ThemeArgs {
        ThemeArgs {
            action,
            file: Some(file),
        }
    }

    #[test]
    fn test_status_defaults_to_light() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("theme.toml");

        let line = handle_theme(&args(ThemeAction::Status, file)).unwrap();
        assert_eq!(line, "theme: light");
    }

    #[test]
    fn test_dark_then_status() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("theme.toml");

        handle_theme(&args(ThemeAction::Dark, file.clone())).unwrap();
        let line = handle_theme(&args(ThemeAction::Status, file)).unwrap();
        assert_eq!(line, "theme: dark");
    }

    #[test]
    fn test_toggle_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("theme.toml");

        let first = handle_theme(&args(ThemeAction::Toggle, file.clone())).unwrap();
        assert_eq!(first, "theme toggled to dark");
        let second = handle_theme(&args(ThemeAction::Toggle, file)).unwrap();
        assert_eq!(second, "theme toggled to light");
    }
}
