//! Key-value persistence with a fixed key schema

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

/// Storage error
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to write storage file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to serialize value: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// String key-value store
///
/// Values are raw strings; encoding is the caller's concern.
pub trait Storage {
    /// Write a value under a key
    fn save(&mut self, key: &str, data: &str) -> Result<(), StorageError>;

    /// Read a value by key. Returns None if not found.
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a key from storage
    fn remove(&mut self, key: &str);
}

/// Shared handle for single-threaded storage access
pub type SharedStorage = Rc<RefCell<dyn Storage>>;

/// The fixed set of storage keys
///
/// Each key holds one JSON-encoded value of a fixed type:
/// - `Armours`, `Damages`: arrays of numbers
/// - `Mode`: the active view
/// - `ChartDataType`: the charted quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey {
    Armours,
    Damages,
    Mode,
    ChartDataType,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Armours => "armours",
            StorageKey::Damages => "damages",
            StorageKey::Mode => "mode",
            StorageKey::ChartDataType => "chart_data_type",
        }
    }
}

/// Load and validate a JSON value under a schema key
///
/// Malformed JSON is treated as absent; callers fall back to their default.
pub fn load_json<T: DeserializeOwned>(storage: &dyn Storage, key: StorageKey) -> Option<T> {
    let raw = storage.load(key.as_str())?;
    serde_json::from_str(&raw).ok()
}

/// Serialize a value to JSON and store it under a schema key
pub fn save_json<T: Serialize>(
    storage: &mut dyn Storage,
    key: StorageKey,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    storage.save(key.as_str(), &raw)
}
