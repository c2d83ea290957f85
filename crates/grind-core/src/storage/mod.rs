//! Persistence for tracker state.
//!
//! The core only talks to a [`KeyValueStore`]. Reads are forgiving: a missing
//! or corrupt value falls back to its default so the tracker always starts.
//! Writes surface failures but never touch in-memory state.

mod json_dir;
mod memory;
pub mod snapshot;
mod traits;

pub use json_dir::JsonDirStore;
pub use memory::MemoryStore;
pub use snapshot::{load_settings, load_tracker, save_settings, save_tracker, Settings};
pub use traits::KeyValueStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::{GrindError, Result};

/// Storage keys.
pub mod keys {
    pub const PROBLEMS: &str = "problems";
    pub const STATS: &str = "stats";
    pub const SETTINGS: &str = "settings";
}

/// Load and decode `key`, falling back to `T::default()` if it is missing,
/// unreadable or corrupt.
pub fn load<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let bytes = match store.load_raw(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return T::default(),
        Err(err) => {
            warn!(key, error = %err, "failed to read persisted value; using default");
            return T::default();
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(err) => {
            warn!(key, error = %err, "persisted value is corrupt; using default");
            T::default()
        }
    }
}

/// Encode `value` as JSON and write it under `key`.
///
/// # Errors
///
/// Returns `GrindError::Storage` on serialization or backend failure.
pub fn save<T, S>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let bytes = serde_json::to_vec_pretty(value)
        .map_err(|e| GrindError::Storage(format!("Failed to encode {}: {}", key, e)))?;
    store.save_raw(key, &bytes)
}
