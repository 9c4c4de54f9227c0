//! Key-value storage seam.
//!
//! The vault persists everything through this trait so the host can plug in
//! whatever blob store it has (a browser extension's local storage area, a
//! config directory, an in-memory map for tests). Values are opaque strings;
//! the vault owns the schema.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use thiserror::Error;

/// Failure in the underlying persistence layer. Surfaced verbatim to the
/// caller; the vault never retries.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StorageError(pub String);

pub type StoreResult<T> = Result<T, StorageError>;

/// String-keyed blob storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StorageError(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StorageError(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StorageError(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

/// Flat JSON file store: the whole map is loaded and rewritten per mutation.
///
/// Fine at this scale — the persisted state is a handful of keys and one
/// credential list.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> StoreResult<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = std::fs::read_to_string(&self.path).map_err(|e| StorageError(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| StorageError(e.to_string()))
    }

    fn save(&self, entries: &HashMap<String, String>) -> StoreResult<()> {
        let raw = serde_json::to_string(entries).map_err(|e| StorageError(e.to_string()))?;
        std::fs::write(&self.path, raw).map_err(|e| StorageError(e.to_string()))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.load()?;
        entries.remove(key);
        self.save(&entries)
    }
}
