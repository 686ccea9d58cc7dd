//! In-memory storage
//!
//! Nothing survives the process. Used by tests and by
//! `FLAMESCORE_STORAGE=memory` for throwaway sessions.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ports::outbound::StoragePort;

/// Storage provider backed by a shared map
///
/// Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStorageProvider {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `key` already holding `value`
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.save(key, value);
        storage
    }
}

impl StoragePort for MemoryStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.entries.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
            }
            Err(e) => tracing::error!("Failed to acquire write lock for storage: {}", e),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.entries.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }
}
