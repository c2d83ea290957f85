//! In-process store, mainly for tests and dry runs.

use std::collections::HashMap;

use crate::error::{GrindError, Result};
use crate::storage::traits::KeyValueStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
    /// Reject writes larger than this many bytes, simulating a quota
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(quota),
        }
    }

    /// Store raw bytes directly, bypassing the quota. Used to seed corrupt data.
    pub fn insert_raw(&mut self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(key.into(), bytes.into());
    }
}

impl KeyValueStore for MemoryStore {
    fn load_raw(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save_raw(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        if let Some(quota) = self.quota {
            if bytes.len() > quota {
                return Err(GrindError::Storage(format!(
                    "Quota exceeded writing {} ({} bytes, max {})",
                    key,
                    bytes.len(),
                    quota
                )));
            }
        }
        self.entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
