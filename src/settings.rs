use crate::error::SettingsError;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Storage key for the dark-mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Flat JSON key/value file holding persisted UI preferences.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config_dir>/caption-pipeline/settings.json`
    pub fn default_location() -> Result<Self, SettingsError> {
        let dir = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        Ok(Self::new(dir.join("caption-pipeline").join("settings.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a boolean. A missing file or key reads as `None`.
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, SettingsError> {
        Ok(self.load()?.get(key).and_then(Value::as_bool))
    }

    /// Write a boolean, keeping every other key.
    pub fn set_bool(&self, key: &str, value: bool) -> Result<(), SettingsError> {
        let mut map = self.load()?;
        map.insert(key.to_string(), Value::Bool(value));

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_vec_pretty(&map)?)?;
        tracing::debug!(path = %self.path.display(), key, value, "saved setting");
        Ok(())
    }

    fn load(&self) -> Result<Map<String, Value>, SettingsError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Light/dark preference, read once on load and written on every toggle.
#[derive(Debug)]
pub struct ThemeSettings {
    store: SettingsStore,
    dark: bool,
}

impl ThemeSettings {
    pub fn load(store: SettingsStore) -> Result<Self, SettingsError> {
        let dark = store.get_bool(DARK_MODE_KEY)?.unwrap_or(false);
        tracing::debug!(dark, "loaded theme preference");
        Ok(Self { store, dark })
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn mode(&self) -> ThemeMode {
        if self.dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Flip the theme and persist it. The in-memory flag only changes once
    /// the write succeeds.
    pub fn toggle(&mut self) -> Result<ThemeMode, SettingsError> {
        let next = !self.dark;
        self.store.set_bool(DARK_MODE_KEY, next)?;
        self.dark = next;
        Ok(self.mode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_defaults_to_light() {
        let temp = tempdir().unwrap();
        let store = SettingsStore::new(temp.path().join("settings.json"));
        let theme = ThemeSettings::load(store).unwrap();
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("settings.json");

        let mut theme = ThemeSettings::load(SettingsStore::new(&path)).unwrap();
        assert_eq!(theme.toggle().unwrap(), ThemeMode::Dark);

        let reloaded = ThemeSettings::load(SettingsStore::new(&path)).unwrap();
        assert!(reloaded.is_dark());

        let raw: Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw[DARK_MODE_KEY], true);
    }

    #[test]
    fn test_toggle_twice_returns_to_light() {
        let temp = tempdir().unwrap();
        let mut theme =
            ThemeSettings::load(SettingsStore::new(temp.path().join("s.json"))).unwrap();
        theme.toggle().unwrap();
        assert_eq!(theme.toggle().unwrap(), ThemeMode::Light);
    }

    #[test]
    fn test_set_bool_keeps_other_keys() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("settings.json");
        std::fs::write(&path, r#"{"language":"French"}"#).unwrap();

        let store = SettingsStore::new(&path);
        store.set_bool(DARK_MODE_KEY, true).unwrap();

        let raw: Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw["language"], "French");
        assert_eq!(raw[DARK_MODE_KEY], true);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();
        let result = ThemeSettings::load(SettingsStore::new(&path));
        assert!(matches!(result, Err(SettingsError::Json(_))));
    }
}
