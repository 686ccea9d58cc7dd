//! Platform-specific implementations
//!
//! This module provides platform-specific implementations of the
//! storage port defined in ports/outbound/storage_port.rs.
//!
//! The correct platform is selected at compile time based on the target architecture.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use anyhow::Context;
use anyhow::Result;

use crate::ports::outbound::StoragePort;
use crate::runner::config::{RunnerConfig, StorageBackend};

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

mod memory;

#[cfg(target_arch = "wasm32")]
pub use wasm::WasmStorageProvider;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{DesktopStorageError, DesktopStorageProvider};

pub use memory::MemoryStorageProvider;

/// Create the storage backend selected by `config`
///
/// Fails if the persistent store exists but cannot be read; starting over an
/// unreadable store would overwrite it on the first save.
pub fn create_storage(config: &RunnerConfig) -> Result<Arc<dyn StoragePort>> {
    match config.storage {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage; edits will not survive a restart");
            Ok(Arc::new(MemoryStorageProvider::new()))
        }
        StorageBackend::Persistent => create_persistent_storage(config),
    }
}

#[cfg(target_arch = "wasm32")]
fn create_persistent_storage(_config: &RunnerConfig) -> Result<Arc<dyn StoragePort>> {
    Ok(Arc::new(WasmStorageProvider::new()))
}

#[cfg(not(target_arch = "wasm32"))]
fn create_persistent_storage(config: &RunnerConfig) -> Result<Arc<dyn StoragePort>> {
    let storage = match &config.storage_path {
        Some(path) => DesktopStorageProvider::open(path),
        None => DesktopStorageProvider::new(),
    }
    .context("Failed to open desktop storage")?;
    Ok(Arc::new(storage))
}
