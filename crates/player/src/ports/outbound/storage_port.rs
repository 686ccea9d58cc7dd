//! Storage Port - durable string key-value store
//!
//! Backed by `window.localStorage` in the browser and by a JSON file on
//! desktop. Values are opaque strings; callers own the encoding.

/// Persistent storage abstraction (localStorage/file-based)
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait StoragePort: Send + Sync {
    /// Save a string value with the given key, overwriting any previous value
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the contract for
/// what keys are used across the application.
pub mod storage_keys {
    /// The serialized editor state
    pub const STATE: &str = "state";
}
