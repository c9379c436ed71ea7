//! Key-value preference storage.
//!
//! Provides the durable storage the theme context persists into. Values are plain
//! strings keyed by name. The default backend is eframe's own app storage through
//! [`EframeStore`]; [`FileStore`] writes a standalone JSON file instead.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

/// Errors raised by a [`PreferenceStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("preference file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("preference encoding: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Durable string key-value storage.
pub trait PreferenceStore {
    fn get_string(&self, key: &str) -> StoreResult<Option<String>>;

    fn set_string(&mut self, key: &str, value: String) -> StoreResult<()>;

    /// Writes pending changes to the backing medium.
    fn flush(&mut self) -> StoreResult<()>;
}

/// In-memory store, lost when the process exits.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    data: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_string(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.data.get(key).cloned())
    }

    fn set_string(&mut self, key: &str, value: String) -> StoreResult<()> {
        self.data.insert(key.to_string(), value);
        Ok(())
    }

    fn flush(&mut self) -> StoreResult<()> {
        Ok(())
    }
}

#[derive(Debug, Default)]
struct EframeEntries {
    values: HashMap<String, String>,
    pending: HashMap<String, String>,
}

/// Store layered over eframe's app storage.
///
/// eframe only lends its storage during creation and inside a frame, so values
/// are read from `cc.storage` up front and writes are queued until the app hands
/// over `frame.storage_mut()` or the shutdown `save` storage. Clones share the
/// same entries: the theme context owns one handle, the app keeps another to
/// write the queue out.
#[derive(Debug, Default, Clone)]
pub struct EframeStore {
    entries: Rc<RefCell<EframeEntries>>,
}

impl EframeStore {
    /// Reads `keys` from eframe's storage during app creation.
    pub fn load(storage: &dyn eframe::Storage, keys: &[&str]) -> Self {
        let values: HashMap<String, String> = keys
            .iter()
            .filter_map(|key| storage.get_string(key).map(|value| (key.to_string(), value)))
            .collect();
        tracing::debug!(entries = values.len(), "Loaded preferences from app storage");

        Self {
            entries: Rc::new(RefCell::new(EframeEntries {
                values,
                pending: HashMap::new(),
            })),
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.entries.borrow().pending.is_empty()
    }

    /// Writes queued values into eframe's storage and flushes it.
    ///
    /// Returns the number of keys written.
    pub fn write_pending(&self, storage: &mut dyn eframe::Storage) -> usize {
        let pending = std::mem::take(&mut self.entries.borrow_mut().pending);
        if pending.is_empty() {
            return 0;
        }

        let written = pending.len();
        for (key, value) in pending {
            storage.set_string(&key, value);
        }
        storage.flush();
        written
    }
}

impl PreferenceStore for EframeStore {
    fn get_string(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().values.get(key).cloned())
    }

    fn set_string(&mut self, key: &str, value: String) -> StoreResult<()> {
        let mut entries = self.entries.borrow_mut();
        entries.values.insert(key.to_string(), value.clone());
        entries.pending.insert(key.to_string(), value);
        Ok(())
    }

    /// Nothing to do here; the queue is written out by [`EframeStore::write_pending`].
    fn flush(&mut self) -> StoreResult<()> {
        Ok(())
    }
}

/// Store backed by a JSON object file.
///
/// The whole document is loaded on open and rewritten on every flush. A missing
/// file reads as an empty store.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    data: serde_json::Map<String, serde_json::Value>,
}

impl FileStore {
    /// Opens the store at `path`, reading any existing document.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => serde_json::Map::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => serde_json::Map::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        tracing::debug!(path = %path.display(), entries = data.len(), "Opened preference file");
        Ok(Self { path, data })
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl PreferenceStore for FileStore {
    fn get_string(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self
            .data
            .get(key)
            .and_then(|v| v.as_str())
            .map(str::to_string))
    }

    fn set_string(&mut self, key: &str, value: String) -> StoreResult<()> {
        self.data.insert(key.to_string(), serde_json::Value::String(value));
        Ok(())
    }

    fn flush(&mut self) -> StoreResult<()> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let text = serde_json::to_string_pretty(&self.data)?;
        let tmp_path = self.temp_path();
        fs::write(&tmp_path, text).map_err(io_err)?;

        if let Err(source) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(io_err(source));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Simple mock of eframe's storage for testing
    #[derive(Default)]
    struct MockStorage {
        data: HashMap<String, String>,
        flushes: usize,
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    #[test]
    fn test_memory_store_set_and_get() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_string("theme").unwrap(), None);

        store.set_string("theme", "dark".to_string()).unwrap();
        assert_eq!(store.get_string("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_eframe_store_reads_requested_keys() {
        let mut storage = MockStorage::default();
        eframe::Storage::set_string(&mut storage, "theme", "dark".to_string());
        eframe::Storage::set_string(&mut storage, "other", "x".to_string());

        let store = EframeStore::load(&storage, &["theme", "missing"]);
        assert_eq!(store.get_string("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.get_string("missing").unwrap(), None);
        assert_eq!(store.get_string("other").unwrap(), None);
        assert!(!store.has_pending());
    }

    #[test]
    fn test_eframe_store_queues_until_written() {
        let mut storage = MockStorage::default();
        let app_handle = EframeStore::load(&storage, &["theme"]);
        let mut context_handle = app_handle.clone();

        context_handle.set_string("theme", "light".to_string()).unwrap();
        context_handle.flush().unwrap();
        assert_eq!(context_handle.get_string("theme").unwrap().as_deref(), Some("light"));
        assert!(app_handle.has_pending());
        assert_eq!(eframe::Storage::get_string(&storage, "theme"), None);

        assert_eq!(app_handle.write_pending(&mut storage), 1);
        assert_eq!(eframe::Storage::get_string(&storage, "theme").as_deref(), Some("light"));
        assert_eq!(storage.flushes, 1);

        // Queue is drained
        assert!(!app_handle.has_pending());
        assert_eq!(app_handle.write_pending(&mut storage), 0);
        assert_eq!(storage.flushes, 1);
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("absent.json")).unwrap();
        assert_eq!(store.get_string("theme").unwrap(), None);
    }

    #[test]
    fn test_file_store_flush_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("app").join("preferences.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set_string("theme", "light".to_string()).unwrap();
        store.flush().unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get_string("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_file_store_rejects_corrupt_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{ not json").unwrap();

        let result = FileStore::open(&path);
        assert!(matches!(result, Err(StoreError::Serialize(_))));
    }

    #[test]
    fn test_file_store_failed_rename_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        let mut store = FileStore::open(&path).unwrap();

        // A non-empty directory in place of the file makes the rename fail
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "").unwrap();

        store.set_string("theme", "dark".to_string()).unwrap();
        let result = store.flush();

        assert!(matches!(result, Err(StoreError::Io { .. })));
        assert!(!dir.path().join("preferences.json.tmp").exists());
    }
}
