//! WASM platform implementations
//!
//! Provides the `window.localStorage` storage adapter used in the browser.

use crate::ports::outbound::StoragePort;

/// Browser storage provider over `window.localStorage`
///
/// Every call looks the storage object up again; there is no cache, so
/// edits from another tab are visible on the next load.
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    pub fn new() -> Self {
        Self
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl StoragePort for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        let Some(storage) = Self::local_storage() else {
            tracing::error!("localStorage is unavailable; dropping save of {}", key);
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::error!("Failed to write localStorage key {}: {:?}", key, e);
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        let storage = Self::local_storage()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to read localStorage key {}: {:?}", key, e);
                None
            }
        }
    }
}
