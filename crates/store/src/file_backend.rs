//! File-based store backend — one JSON document per key.
//!
//! Storage location: `~/.edgepersona/data/<key>.json` by default. Keys are
//! sanitized to file names (anything outside `[A-Za-z0-9_-]` becomes `_`),
//! which keeps the `user_<id>_profile` key family human-inspectable on disk.
//!
//! This backend is simple, portable, and requires zero external services.

use async_trait::async_trait;
use edgepersona_core::error::StoreError;
use edgepersona_core::KvStore;
use std::path::PathBuf;
use tracing::debug;

/// A file-backed key-value store.
///
/// Reads go straight to disk; writes create the directory lazily and replace
/// the whole document. Suited to the single-user design target.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory is created on first write.
    pub fn new(dir: PathBuf) -> Self {
        debug!(dir = %dir.display(), "File store backend ready");
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{safe}.json"))
    }
}

#[async_trait]
impl KvStore for FileStore {
    fn name(&self) -> &str {
        "file"
    }

    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        let path = self.path_for(key);
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::ReadFailed {
                    key: key.to_string(),
                    reason: e.to_string(),
                })
            }
        };

        let value = serde_json::from_str(&content).map_err(|e| StoreError::Corrupted {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(value))
    }

    async fn put(&self, key: &str, value: serde_json::Value) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| StoreError::WriteFailed {
            key: key.to_string(),
            reason: format!("failed to create store directory: {e}"),
        })?;

        let content = serde_json::to_string(&value).map_err(|e| StoreError::WriteFailed {
            key: key.to_string(),
            reason: e.to_string(),
        })?;

        std::fs::write(self.path_for(key), content).map_err(|e| StoreError::WriteFailed {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::DeleteFailed {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn put_then_get_persists() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().to_path_buf());

        store
            .put("user_u1_profile", json!({"id": "u1", "name": "Me"}))
            .await
            .unwrap();

        // A fresh instance over the same directory sees the document
        let store2 = FileStore::new(tmp.path().to_path_buf());
        let value = store2.get("user_u1_profile").await.unwrap().unwrap();
        assert_eq!(value["name"], "Me");
    }

    #[tokio::test]
    async fn missing_key_is_none() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().to_path_buf());
        assert!(store.get("user_u1_history").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().to_path_buf());

        store.put("user_u1_events", json!([])).await.unwrap();
        store.delete("user_u1_events").await.unwrap();
        assert!(store.get("user_u1_events").await.unwrap().is_none());

        // Second delete of a gone key succeeds
        store.delete("user_u1_events").await.unwrap();
    }

    #[tokio::test]
    async fn corrupted_document_surfaces_distinctly() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().to_path_buf());

        std::fs::write(tmp.path().join("user_u1_profile.json"), "not json").unwrap();
        let err = store.get("user_u1_profile").await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupted { .. }));
    }

    #[tokio::test]
    async fn keys_sanitize_to_file_names() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().to_path_buf());

        store.put("user_a/b_profile", json!(1)).await.unwrap();
        assert!(tmp.path().join("user_a_b_profile.json").exists());
        assert_eq!(store.get("user_a/b_profile").await.unwrap(), Some(json!(1)));
    }
}
