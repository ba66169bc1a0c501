use crate::dashboard::{JsonFileStore, LayoutController, LayoutStore, WidgetCatalog};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_storage_path() -> PathBuf {
    PathBuf::from("dashboard_storage.json")
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// File backing the local key-value store the dashboard layout is saved in.
    #[serde(default = "default_storage_path")]
    pub storage_path: PathBuf,
    /// When enabled the logger starts at debug level and honours `RUST_LOG`.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file that log output is written to instead of stdout.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
            debug_logging: false,
            log_file: None,
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Build a layout controller over the configured storage file with the
    /// built-in widget catalog.
    pub fn open_controller(&self) -> LayoutController<JsonFileStore> {
        let storage = JsonFileStore::new(&self.storage_path);
        LayoutController::new(LayoutStore::new(storage, WidgetCatalog::with_defaults()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings::load(path.to_str().unwrap()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"debug_logging":true}"#).unwrap();
        assert!(settings.debug_logging);
        assert_eq!(settings.storage_path, PathBuf::from("dashboard_storage.json"));
        assert_eq!(settings.log_file, None);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ nope").unwrap();
        assert!(Settings::load(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let path = path.to_str().unwrap();
        let settings = Settings {
            storage_path: dir.path().join("store.json"),
            debug_logging: true,
            log_file: Some(dir.path().join("app.log")),
        };
        settings.save(path).unwrap();
        assert_eq!(Settings::load(path).unwrap(), settings);
    }
}
