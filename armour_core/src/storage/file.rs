//! File-backed storage - the whole store is one JSON object in one file

use super::{Storage, StorageError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Durable key-value store persisted as a single JSON object map
///
/// The file is read once at construction; an unreadable or malformed file
/// degrades to an empty store. Every save rewrites the whole file.
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();

        FileStorage { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn save(&mut self, key: &str, data: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), data.to_string());
        self.flush()
    }

    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        let _ = self.flush();
    }
}
