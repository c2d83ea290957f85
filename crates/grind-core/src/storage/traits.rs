//! Key-value store trait definition.
//!
//! The `KeyValueStore` trait is the persistence seam: the core hands it opaque
//! byte blobs under string keys and never assumes anything about the medium.

use crate::error::Result;

/// Blob store addressed by string keys.
///
/// Implementations must ensure:
/// - A successful `save_raw` is fully visible to the next `load_raw`
/// - A failed `save_raw` leaves the previous value intact
pub trait KeyValueStore {
    /// Read the blob stored under `key`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(bytes))` if present, `Ok(None)` if the key was never written.
    ///
    /// # Errors
    ///
    /// Returns `GrindError::Storage` if the backend cannot be read.
    fn load_raw(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `GrindError::Storage` on quota or write failure.
    fn save_raw(&mut self, key: &str, bytes: &[u8]) -> Result<()>;
}
