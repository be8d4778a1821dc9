//! User configuration at ~/.config/daybook/config.toml

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_STORAGE_KEY;
use crate::error::{DaybookError, DaybookResult};
use crate::index::EventIndex;
use crate::storage::{FileStorage, NoopStorage, Storage};
use crate::store::EventStore;

static DEFAULT_DATA_DIR: &str = "~/.local/share/daybook";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_persist() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaybookConfig {
    /// Directory holding the event record (`~` is expanded)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Name of the record the events are saved under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Set to false to keep events in memory only
    #[serde(default = "default_persist")]
    pub persist: bool,
}

impl Default for DaybookConfig {
    fn default() -> Self {
        DaybookConfig {
            data_dir: default_data_dir(),
            storage_key: default_storage_key(),
            persist: default_persist(),
        }
    }
}

impl DaybookConfig {
    pub fn config_path() -> DaybookResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DaybookError::Config("Could not determine config directory".into()))?
            .join("daybook");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config, writing a commented-out default on first run.
    pub fn load() -> DaybookResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> DaybookResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| DaybookError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DaybookError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DaybookResult<()> {
        let contents = format!(
            "\
# daybook configuration

# Where events are saved:
# data_dir = \"{}\"

# Name of the saved record (file name without .json):
# storage_key = \"{}\"

# Keep events in memory only:
# persist = false
",
            DEFAULT_DATA_DIR, DEFAULT_STORAGE_KEY
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DaybookError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DaybookError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn storage(&self) -> Box<dyn Storage> {
        if self.persist {
            Box::new(FileStorage::new(self.data_path()))
        } else {
            Box::new(NoopStorage)
        }
    }

    pub fn open_store(&self) -> EventStore {
        EventStore::load_record(self.storage(), &self.storage_key)
    }

    pub fn open_index(&self) -> EventIndex {
        EventIndex::new(self.open_store())
    }

    pub fn to_toml(&self) -> DaybookResult<String> {
        toml::to_string_pretty(self).map_err(|e| DaybookError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;

    #[test]
    fn default_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("daybook").join("config.toml");

        DaybookConfig::create_default_config(&path).unwrap();
        let config = DaybookConfig::load_from(&path).unwrap();
        assert_eq!(config, DaybookConfig::default());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DaybookConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, DaybookConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_dir = \"/tmp/elsewhere\"\nstorage_key = \"planner\"\npersist = false\n",
        )
        .unwrap();

        let config = DaybookConfig::load_from(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/elsewhere"));
        assert_eq!(config.storage_key, "planner");
        assert!(!config.persist);
    }

    #[test]
    fn tilde_is_expanded() {
        let config = DaybookConfig::default();
        assert!(!config.data_path().to_string_lossy().starts_with('~'));
    }

    #[test]
    fn store_persists_to_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = DaybookConfig {
            data_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        let mut store = config.open_store();
        let event = Event::new("A", "08:00".parse().unwrap(), "09:00".parse().unwrap());
        store.add("2025-03-20".parse().unwrap(), event);

        assert!(dir.path().join("events.json").exists());
        assert_eq!(config.open_store().events().event_count(), 1);
    }

    #[test]
    fn persist_false_keeps_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = DaybookConfig {
            data_dir: dir.path().to_path_buf(),
            persist: false,
            ..Default::default()
        };

        let mut store = config.open_store();
        let event = Event::new("A", "08:00".parse().unwrap(), "09:00".parse().unwrap());
        store.add("2025-03-20".parse().unwrap(), event);

        assert!(!dir.path().join("events.json").exists());
        assert!(config.open_store().events().is_empty());
    }

    #[test]
    fn serializes_to_toml() {
        let toml = DaybookConfig::default().to_toml().unwrap();
        assert!(toml.contains("storage_key = \"events\""));
        assert!(toml.contains("persist = true"));
    }
}
