//! Durable Key-Value Storage
//!
//! The persistent cache that survives process restarts. The session layer
//! stores its `token` and `user` keys here; no other component writes them.
//!
//! The trait is deliberately synchronous: session bootstrap must reach a
//! defined state before the first authorization check, so reads cannot be
//! allowed to suspend.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use thiserror::Error;

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from the durable store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be serialized to the backing format
    #[error("store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable string-keyed storage.
///
/// Implementations must be safe to share between the controller and any
/// background flows holding a reference to it.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when the key is absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn put(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Recover the guard from a poisoned mutex; the map itself is always
/// left in a consistent state by every critical section here.
fn lock(map: &Mutex<HashMap<String, String>>) -> MutexGuard<'_, HashMap<String, String>> {
    match map.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// In-memory store. Ephemeral; used by tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(lock(&self.map).get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        lock(&self.map).insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        lock(&self.map).remove(key);
        Ok(())
    }
}

/// File-backed store persisting a single JSON object.
///
/// Writes go to a sibling temp file which is then renamed over the target,
/// so a crash mid-write never leaves a truncated store behind.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    map: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open (or create) the store at `path`.
    ///
    /// A corrupt backing file is logged and treated as empty: this is a
    /// cache, and refusing to start over it would be worse than losing it.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let map = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<HashMap<String, String>>(&contents) {
                Ok(map) => map,
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "corrupt store file, starting empty");
                    HashMap::new()
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(error) => return Err(error.into()),
        };

        Ok(Self {
            path,
            map: Mutex::new(map),
        })
    }

    fn flush(&self, map: &HashMap<String, String>) -> StoreResult<()> {
        let contents = serde_json::to_string(map)?;

        let mut tmp = self.path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        std::fs::write(&tmp, contents)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(lock(&self.map).get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut map = lock(&self.map);
        map.insert(key.to_string(), value.to_string());
        self.flush(&map)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut map = lock(&self.map);
        if map.remove(key).is_some() {
            self.flush(&map)?;
        }
        Ok(())
    }
}
