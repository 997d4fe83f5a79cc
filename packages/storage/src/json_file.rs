// ABOUTME: JSON file backed key-value store
// ABOUTME: Default platform store, kept in ~/.eightpass/settings.json

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::{KeyValueStore, StorageError, StorageResult};

/// Flat JSON object of string keys to string values on disk.
///
/// Entries are loaded once at open. `set` and `remove` only touch memory;
/// `save` writes the whole map to a sibling temp file and renames it over
/// the store so a crash mid-write never leaves a truncated file behind.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    dirty: bool,
}

impl JsonFileStore {
    /// Open the store at `path`, loading existing entries if the file exists
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() || path.is_dir() {
            return Err(StorageError::InvalidPath(path));
        }

        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str::<BTreeMap<String, String>>(&content)?
            }
        } else {
            debug!("Settings store does not exist yet at {:?}", path);
            BTreeMap::new()
        };

        info!("Loaded {} settings from {:?}", entries.len(), path);

        Ok(Self {
            path,
            entries,
            dirty: false,
        })
    }

    /// Open the store at the default settings location
    pub fn open_default() -> StorageResult<Self> {
        Self::open(eightpass_config::settings_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether there are changes not yet written by `save`
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl KeyValueStore for JsonFileStore {
    fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.dirty = true;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<bool> {
        let removed = self.entries.remove(key).is_some();
        self.dirty |= removed;
        Ok(removed)
    }

    fn save(&mut self) -> StorageResult<()> {
        if !self.dirty && self.path.exists() {
            debug!("Settings store at {:?} is clean, nothing to save", self.path);
            return Ok(());
        }

        // Ensure the .eightpass directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.entries)?;
        let temp_path = self.temp_path();
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&temp_path, &self.path)?;

        self.dirty = false;
        debug!("Saved {} settings to {:?}", self.entries.len(), self.path);
        Ok(())
    }
}
