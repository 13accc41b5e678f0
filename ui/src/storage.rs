use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::UiError;

/// File-backed key-value store with last-write-wins semantics, used for UI
/// preferences and other small client-side state.
///
/// Every mutation persists synchronously. The file is replaced via a
/// write-then-rename so a crash mid-write leaves the previous contents
/// intact rather than a truncated store.
#[derive(Debug)]
pub struct KvStore {
    path: PathBuf,
    entries: serde_json::Map<String, Value>,
}

impl KvStore {
    /// Opens the store at `path`, loading any existing entries. A missing
    /// file is an empty store; an unreadable or non-object file is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, UiError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Object(map)) => map,
                Ok(other) => {
                    return Err(UiError::StorageFormatError(format!(
                        "{}: expected a JSON object, found {}",
                        path.display(),
                        json_type_name(&other)
                    )))
                }
                Err(e) => {
                    return Err(UiError::StorageFormatError(format!(
                        "{}: {}",
                        path.display(),
                        e
                    )))
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => serde_json::Map::new(),
            Err(e) => return Err(UiError::IoError { source: e }),
        };

        tracing::debug!(
            "Opened key-value store at {} ({} entries)",
            path.display(),
            entries.len()
        );
        Ok(Self { path, entries })
    }

    /// Inserts or replaces `key` and persists.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), UiError> {
        let value = serde_json::to_value(value)
            .map_err(|e| UiError::StorageFormatError(format!("serializing '{key}': {e}")))?;
        self.entries.insert(key.to_string(), value);
        self.persist()
    }

    /// Reads `key`, or `None` when the key is absent or its stored value does
    /// not deserialize as `T`. A type mismatch is logged, not raised; stale
    /// stored state must never take the UI down.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.entries.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Stored value for '{}' has an unexpected shape: {}", key, e);
                None
            }
        }
    }

    /// Removes `key` and persists; returns whether the key existed.
    pub fn remove(&mut self, key: &str) -> Result<bool, UiError> {
        match self.entries.remove(key) {
            Some(_) => {
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) -> Result<(), UiError> {
        let raw = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| UiError::StorageFormatError(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Watchlist {
        symbols: Vec<String>,
    }

    #[test]
    fn test_set_get_round_trip() {
        let dir = tempdir().unwrap();
        let mut store = KvStore::open(dir.path().join("store.json")).unwrap();

        let watchlist = Watchlist {
            symbols: vec!["AAPL".to_string(), "TSLA".to_string()],
        };
        store.set("watchlist", &watchlist).unwrap();

        assert_eq!(store.get::<Watchlist>("watchlist").unwrap(), watchlist);
        assert!(store.contains("watchlist"));
    }

    #[test]
    fn test_reopen_sees_persisted_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let mut store = KvStore::open(&path).unwrap();
            store.set("theme", &"dark").unwrap();
        }

        let reopened = KvStore::open(&path).unwrap();
        assert_eq!(reopened.get::<String>("theme").unwrap(), "dark");
    }

    #[test]
    fn test_missing_key_and_type_mismatch_read_as_none() {
        // Surface the shape-mismatch warning in test output.
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let dir = tempdir().unwrap();
        let mut store = KvStore::open(dir.path().join("store.json")).unwrap();
        store.set("count", &3_u32).unwrap();

        assert_eq!(store.get::<u32>("absent"), None);
        assert_eq!(store.get::<Watchlist>("count"), None);
        // The bad read must not clobber the stored value.
        assert_eq!(store.get::<u32>("count"), Some(3));
    }

    #[test]
    fn test_remove() {
        let dir = tempdir().unwrap();
        let mut store = KvStore::open(dir.path().join("store.json")).unwrap();
        store.set("key", &1).unwrap();

        assert!(store.remove("key").unwrap());
        assert!(!store.remove("key").unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_missing_file_is_an_empty_store() {
        let dir = tempdir().unwrap();
        let store = KvStore::open(dir.path().join("does-not-exist.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_corrupt_file_is_a_format_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{not json").unwrap();

        match KvStore::open(&path) {
            Err(UiError::StorageFormatError(_)) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_non_object_file_is_a_format_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        match KvStore::open(&path) {
            Err(UiError::StorageFormatError(message)) => {
                assert!(message.contains("an array"), "message was: {message}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
