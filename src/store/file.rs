//! File-backed key/value store
//!
//! The whole map lives in one JSON object file. Every write rewrites the file
//! through a temporary sibling and a rename, so a crash never leaves a
//! half-written state file behind.

use super::{KeyValueStore, StoreError};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Persistent backend rooted at a single file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`
    ///
    /// A missing file is an empty store. A file that is not a JSON object of
    /// strings is treated as corrupt: it is logged and replaced on the next
    /// write.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let values = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), %err, "state file is corrupt, starting fresh");
                BTreeMap::new()
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        tracing::debug!(path = %path.display(), keys = values.len(), "state file opened");
        Ok(Self { path, values })
    }

    /// Default location: `<data dir>/draggin/state.json`
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .map(|dir| dir.join("draggin").join("state.json"))
            .unwrap_or_else(|| PathBuf::from("draggin-state.json"))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let content = serde_json::to_string_pretty(&self.values)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(|source| self.io_error(source))?;
        fs::rename(&tmp, &self.path).map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let previous = self.values.insert(key.to_string(), value);
        self.flush().inspect_err(|_| {
            // Keep memory in step with what is on disk
            match previous {
                Some(old) => self.values.insert(key.to_string(), old),
                None => self.values.remove(key),
            };
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("state.json")).unwrap();
        assert_eq!(store.get("version"), None);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("tries", "4".to_string()).unwrap();
        store.set("eventOrder", "drag,try,".to_string()).unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("tries").as_deref(), Some("4"));
        assert_eq!(reopened.get("eventOrder").as_deref(), Some("drag,try,"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn failed_write_keeps_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("tries", "1".to_string()).unwrap();

        // A directory where the temp file goes makes every flush fail
        fs::create_dir(path.with_extension("json.tmp")).unwrap();
        assert!(store.set("tries", "2".to_string()).is_err());
        assert!(store.set("drags", "5".to_string()).is_err());

        assert_eq!(store.get("tries").as_deref(), Some("1"));
        assert_eq!(store.get("drags"), None);
        assert_eq!(FileStore::open(&path).unwrap().get("tries").as_deref(), Some("1"));
    }

    #[test]
    fn corrupt_file_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json").unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("tries"), None);

        store.set("tries", "1".to_string()).unwrap();
        assert_eq!(FileStore::open(&path).unwrap().get("tries").as_deref(), Some("1"));
    }
}
