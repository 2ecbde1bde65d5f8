//! KvStore trait — the abstraction over the remote key-value collaborator.
//!
//! The service treats storage as an opaque get/put/delete-by-key capability
//! holding JSON documents. Implementations: file-backed, in-memory (testing).

use crate::error::StoreError;
use async_trait::async_trait;

/// The core key-value store trait.
///
/// All persisted state — profile, history, events — crosses through this
/// interface; the service itself is stateless between invocations.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// The backend name (e.g., "file", "in_memory").
    fn name(&self) -> &str;

    /// Fetch the JSON document stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError>;

    /// Store a JSON document under `key`, replacing any existing value.
    async fn put(&self, key: &str, value: serde_json::Value) -> Result<(), StoreError>;

    /// Delete the document under `key`. Deleting a missing key is a no-op.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}
