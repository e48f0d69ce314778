//! In-memory storage for tests and ephemeral runs

use super::{Storage, StorageError};
use std::collections::HashMap;

/// Non-durable key-value store backed by a map
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl Storage for MemoryStorage {
    fn save(&mut self, key: &str, data: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), data.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
