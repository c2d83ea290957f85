//! Directory-backed JSON store: one `<key>.json` file per key.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{GrindError, Result};
use crate::storage::traits::KeyValueStore;

/// Stores each key as a JSON file inside a data directory.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    root: PathBuf,
}

impl JsonDirStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `GrindError::Storage` if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            GrindError::Storage(format!(
                "Failed to create data directory {}: {}",
                root.display(),
                e
            ))
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(GrindError::InvalidInput(format!(
                "Invalid storage key: {:?}",
                key
            )));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for JsonDirStore {
    fn load_raw(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(GrindError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn save_raw(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(key)?;
        crate::fs::write_atomic(&path, bytes).map_err(|e| {
            GrindError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })
    }
}
