//! Single-file JSON store
//!
//! Keeps the whole key space as one JSON object on disk, read at open and
//! rewritten on every mutation. Good enough for one player's daily state.

use super::{KvStore, StoreError};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store holding a single JSON object.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl FileStore {
    /// Open (or create) the store at `path`.
    ///
    /// A missing file starts the store empty; it is written on the first
    /// mutation.
    ///
    /// # Errors
    /// Returns `StoreError` if the file exists but cannot be read or parsed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => {
                let value: Value = serde_json::from_str(&content)?;
                match value {
                    Value::Object(map) => map,
                    _ => Map::new(),
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    /// Where this store persists its entries.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&Value::Object(self.entries.clone()))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("versele-store-{name}-{}.json", std::process::id()));
        path
    }

    #[test]
    fn missing_file_opens_empty() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn values_survive_reopen() {
        let path = temp_path("reopen");
        let _ = fs::remove_file(&path);

        {
            let mut store = FileStore::open(&path).unwrap();
            store.set("lock", json!({"day": "2024-06-01"})).unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        assert_eq!(
            store.get("lock").unwrap(),
            Some(json!({"day": "2024-06-01"}))
        );

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn remove_persists() {
        let path = temp_path("remove");
        let _ = fs::remove_file(&path);

        let mut store = FileStore::open(&path).unwrap();
        store.set("session", json!(1)).unwrap();
        store.remove("session").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("session").unwrap(), None);

        let _ = fs::remove_file(&path);
    }
}
