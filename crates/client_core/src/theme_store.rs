use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use shared::domain::Theme;
use tracing::warn;

/// Single persisted light/dark flag.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `None` when nothing usable has been stored yet.
    pub fn load(&self) -> Result<Option<Theme>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read theme from {}", self.path.display()))
            }
        };
        match raw.parse::<Theme>() {
            Ok(theme) => Ok(Some(theme)),
            Err(error) => {
                warn!(path = %self.path.display(), %error, "ignoring stored theme");
                Ok(None)
            }
        }
    }

    pub fn load_or_default(&self) -> Theme {
        match self.load() {
            Ok(theme) => theme.unwrap_or_default(),
            Err(error) => {
                warn!(%error, "falling back to default theme");
                Theme::default()
            }
        }
    }

    pub fn save(&self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create theme directory '{}'", parent.display())
            })?;
        }
        fs::write(&self.path, theme.as_str())
            .with_context(|| format!("failed to write theme to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_no_preference() {
        let dir = tempfile::tempdir().expect("dir");
        let store = ThemeStore::new(dir.path().join("theme"));
        assert_eq!(store.load().expect("load"), None);
        assert_eq!(store.load_or_default(), Theme::Dark);
    }

    #[test]
    fn saved_theme_is_read_back() {
        let dir = tempfile::tempdir().expect("dir");
        let store = ThemeStore::new(dir.path().join("nested").join("theme"));
        store.save(Theme::Light).expect("save");
        assert_eq!(store.load().expect("load"), Some(Theme::Light));
        assert_eq!(
            fs::read_to_string(store.path()).expect("raw"),
            "light"
        );
    }

    #[test]
    fn garbage_is_ignored() {
        let dir = tempfile::tempdir().expect("dir");
        let path = dir.path().join("theme");
        fs::write(&path, "solarized").expect("write");
        let store = ThemeStore::new(path);
        assert_eq!(store.load().expect("load"), None);
        assert_eq!(store.load_or_default(), Theme::Dark);
    }
}
