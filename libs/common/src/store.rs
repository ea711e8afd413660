//! Synchronous key-value store for the mock backend
//!
//! Values are JSON-encoded strings under flat string keys, the same model as
//! browser local storage. Three backends are provided: an in-process map for
//! tests, a JSON file that survives restarts, and a Redis namespace (see
//! [`crate::cache`]).
//!
//! The stores serialize writers within one process only. Two processes sharing
//! the same file or Redis prefix can overwrite each other's updates.

use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use config::Config;
use serde::{Serialize, de::DeserializeOwned};
use tracing::info;

use crate::{
    cache::RedisStore,
    error::{StoreError, StoreResult},
};

/// A synchronous string key-value store
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`; removing a missing key is not an error
    fn delete(&self, key: &str) -> StoreResult<()>;

    /// List every key currently stored
    fn keys(&self) -> StoreResult<Vec<String>>;

    /// Check that the store is reachable
    fn health_check(&self) -> StoreResult<bool> {
        Ok(true)
    }
}

/// JSON helpers available on every [`KeyValueStore`]
pub trait JsonStoreExt {
    /// Read and decode the value under `key`
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>>;

    /// Encode and store `value` under `key`
    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> JsonStoreExt for S {
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StoreError::Serialization {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialization {
            key: key.to_string(),
            source,
        })?;
        self.set(key, &raw)
    }
}

/// In-process store, discarded when dropped
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.keys().cloned().collect())
    }
}

/// Store persisted as a single JSON object on disk
///
/// The whole file is loaded at open and rewritten after every mutation through
/// a temporary file and a rename, so a crash never leaves a half-written file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, starting empty if the file does not exist
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|source| StoreError::Serialization {
                    key: path.display().to_string(),
                    source,
                })?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        info!(
            "Opened file store at {} with {} keys",
            path.display(),
            entries.len()
        );

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents =
            serde_json::to_string_pretty(entries).map_err(|source| StoreError::Serialization {
                key: self.path.display().to_string(),
                source,
            })?;

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Apply `mutate` to a copy of the entries and keep it only once it is on disk
    fn update(&self, mutate: impl FnOnce(&mut BTreeMap<String, String>)) -> StoreResult<()> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        let mut next = entries.clone();
        mutate(&mut next);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        {
            let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
            if !entries.contains_key(key) {
                return Ok(());
            }
        }
        self.update(|entries| {
            entries.remove(key);
        })
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.keys().cloned().collect())
    }

    fn health_check(&self) -> StoreResult<bool> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;
        Ok(dir.is_dir())
    }
}

/// Which backend to open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Volatile in-process map
    Memory,
    /// JSON file at the given path
    File(PathBuf),
    /// Redis instance with every key namespaced by `prefix`
    Redis { url: String, prefix: String },
}

/// Key-value store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
}

impl StoreConfig {
    /// Build the configuration from the shared settings layer
    pub fn from_settings(settings: &Config) -> StoreResult<Self> {
        let kind = settings.get_string("store")?;
        let backend = match kind.to_ascii_lowercase().as_str() {
            "memory" => StoreBackend::Memory,
            "file" => StoreBackend::File(PathBuf::from(settings.get_string("data_file")?)),
            "redis" => StoreBackend::Redis {
                url: settings.get_string("redis_url")?,
                prefix: settings.get_string("redis_prefix")?,
            },
            other => {
                return Err(StoreError::Configuration(format!(
                    "Unknown store backend: {}",
                    other
                )));
            }
        };

        Ok(Self { backend })
    }

    /// Build the configuration from `MOCK_BACKEND_*` environment variables
    pub fn from_env() -> StoreResult<Self> {
        let settings = crate::settings::load_settings()?;
        Self::from_settings(&settings)
    }
}

/// Open the configured backend as a shared handle
pub fn open_store(config: &StoreConfig) -> StoreResult<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match &config.backend {
        StoreBackend::Memory => {
            info!("Using in-memory store");
            Arc::new(MemoryStore::new())
        }
        StoreBackend::File(path) => Arc::new(FileStore::open(path.clone())?),
        StoreBackend::Redis { url, prefix } => Arc::new(RedisStore::new(url, prefix)?),
    };
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serial_test::serial;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: u64,
        label: String,
    }

    #[test]
    fn test_memory_store_set_get_delete() {
        let store = MemoryStore::new();

        store.set("key", "value").unwrap();
        assert_eq!(store.get("key").unwrap(), Some("value".to_string()));

        store.delete("key").unwrap();
        assert_eq!(store.get("key").unwrap(), None);

        // Deleting again is fine
        store.delete("key").unwrap();
    }

    #[test]
    fn test_json_helpers() {
        let store = MemoryStore::new();
        let record = Record {
            id: 7,
            label: "seven".to_string(),
        };

        store.set_json("record", &record).unwrap();
        assert_eq!(store.get_json::<Record>("record").unwrap(), Some(record));
        assert_eq!(store.get_json::<Record>("missing").unwrap(), None);
    }

    #[test]
    fn test_json_helpers_report_corrupt_values() {
        let store = MemoryStore::new();
        store.set("record", "{not json").unwrap();

        let err = store.get_json::<Record>("record").unwrap_err();
        assert!(matches!(err, StoreError::Serialization { ref key, .. } if key == "record"));
    }

    #[test]
    fn test_json_helpers_through_trait_object() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store.set_json("list", &vec![1, 2, 3]).unwrap();
        assert_eq!(store.get_json::<Vec<u32>>("list").unwrap(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        {
            let store = FileStore::open(&path).unwrap();
            store.set("a", "1").unwrap();
            store.set("b", "2").unwrap();
            store.delete("a").unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap(), Some("2".to_string()));
        assert_eq!(store.keys().unwrap(), vec!["b".to_string()]);
        assert!(store.health_check().unwrap());
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "[1, 2").unwrap();

        assert!(matches!(
            FileStore::open(&path),
            Err(StoreError::Serialization { .. })
        ));
    }

    #[test]
    fn test_file_store_treats_empty_file_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    #[serial]
    fn test_store_config_from_env() {
        unsafe {
            std::env::set_var("MOCK_BACKEND_STORE", "file");
            std::env::set_var("MOCK_BACKEND_DATA_FILE", "/tmp/mock.json");
        }

        let config = StoreConfig::from_env().unwrap();
        assert_eq!(
            config.backend,
            StoreBackend::File(PathBuf::from("/tmp/mock.json"))
        );

        unsafe {
            std::env::set_var("MOCK_BACKEND_STORE", "tape");
        }
        assert!(matches!(
            StoreConfig::from_env(),
            Err(StoreError::Configuration(_))
        ));

        unsafe {
            std::env::remove_var("MOCK_BACKEND_STORE");
            std::env::remove_var("MOCK_BACKEND_DATA_FILE");
        }
    }

    #[test]
    fn test_open_memory_store() {
        let config = StoreConfig {
            backend: StoreBackend::Memory,
        };
        let store = open_store(&config).unwrap();
        assert!(store.health_check().unwrap());
        assert!(store.keys().unwrap().is_empty());
    }
}
