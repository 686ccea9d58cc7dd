//! Desktop platform implementations
//!
//! The file-backed storage adapter used outside the browser. All keys share
//! one JSON object on disk; reads are served from memory.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use directories::ProjectDirs;

use crate::ports::outbound::StoragePort;

const STORAGE_FILE: &str = "storage.json";

type Entries = HashMap<String, String>;

#[derive(Debug, thiserror::Error)]
pub enum DesktopStorageError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed storage file {path:?}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to encode storage entries: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Desktop storage provider with file-based persistence
///
/// The file lives in the platform config directory, e.g.
/// `~/.config/player/storage.json` on Linux, unless
/// `FLAMESCORE_STORAGE_PATH` points elsewhere. Every save rewrites the
/// whole file.
#[derive(Clone)]
pub struct DesktopStorageProvider {
    path: PathBuf,
    entries: Arc<RwLock<Entries>>,
}

impl DesktopStorageProvider {
    /// Open the store in the platform config directory
    pub fn new() -> Result<Self, DesktopStorageError> {
        Self::open(default_storage_path())
    }

    /// Open the store backed by `path`
    ///
    /// A missing file is an empty store. A file that cannot be read or parsed
    /// is an error and is left untouched on disk.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DesktopStorageError> {
        let path = path.into();
        let entries = read_entries(&path)?;

        tracing::debug!(path = ?path, keys = entries.len(), "Desktop storage opened");

        Ok(Self {
            path,
            entries: Arc::new(RwLock::new(entries)),
        })
    }

    pub fn storage_path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to the cached entries and write the result through
    fn update(&self, change: impl FnOnce(&mut Entries)) -> Result<(), DesktopStorageError> {
        let snapshot = {
            let mut entries = self
                .entries
                .write()
                .map_err(|_| DesktopStorageError::Poisoned)?;
            change(&mut entries);
            serde_json::to_string_pretty(&*entries).map_err(DesktopStorageError::Serialize)?
        };
        write_atomically(&self.path, &snapshot)
    }
}

impl StoragePort for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        let result = self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        });
        if let Err(e) = result {
            tracing::error!("Failed to save key {}: {}", key, e);
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.entries.read() {
            Ok(entries) => entries.get(key).cloned(),
            Err(_) => {
                tracing::error!("Failed to load key {}: {}", key, DesktopStorageError::Poisoned);
                None
            }
        }
    }
}

fn read_entries(path: &Path) -> Result<Entries, DesktopStorageError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Entries::new()),
        Err(source) => {
            return Err(DesktopStorageError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&data).map_err(|source| DesktopStorageError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Write to a sibling temp file, then rename over `path`
fn write_atomically(path: &Path, data: &str) -> Result<(), DesktopStorageError> {
    let io_err = |source| DesktopStorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, data).map_err(io_err)?;
    fs::rename(&tmp, path).map_err(io_err)
}

fn default_storage_path() -> PathBuf {
    match ProjectDirs::from("io", "flamescore", "player") {
        Some(dirs) => dirs.config_dir().join(STORAGE_FILE),
        None => PathBuf::from(STORAGE_FILE),
    }
}
