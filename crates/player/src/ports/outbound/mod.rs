//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing the editor session to persist state without depending on a
//! concrete storage backend.

pub mod storage_port;

pub use storage_port::{storage_keys, StoragePort};

#[cfg(any(test, feature = "testing"))]
pub use storage_port::MockStoragePort;
