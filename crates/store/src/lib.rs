//! Key-value store implementations for EdgePersona.

pub mod file_backend;
pub mod in_memory;

pub use file_backend::FileStore;
pub use in_memory::InMemoryStore;

use edgepersona_config::AppConfig;
use edgepersona_core::KvStore;
use std::sync::Arc;

/// Build the configured store backend.
pub fn build_from_config(config: &AppConfig) -> Arc<dyn KvStore> {
    match config.store.backend.as_str() {
        "memory" => Arc::new(InMemoryStore::new()),
        // Config validation only admits "file" and "memory"
        _ => {
            let path = config
                .store
                .path
                .clone()
                .unwrap_or_else(AppConfig::data_dir);
            Arc::new(FileStore::new(path))
        }
    }
}
