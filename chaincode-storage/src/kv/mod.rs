//! Key-value storage backends.
//!
//! This module provides an abstraction over key-value storage with two implementations:
//! - `MemoryBackend`: In-memory BTreeMap-based storage for testing
//! - `RocksBackend`: RocksDB-based persistent storage for production

mod memory_backend;
#[cfg(feature = "rocksdb")]
mod rocks_backend;

pub use memory_backend::MemoryBackend;
#[cfg(feature = "rocksdb")]
pub use rocks_backend::RocksBackend;

use crate::error::StorageError;

/// Trait for key-value storage backends.
///
/// Every call is applied on its own; callers needing several writes to land
/// together must arrange that above this layer.
pub trait KvBackend: Send + Sync {
    /// Get a value by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError>;

    /// Put a key-value pair.
    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StorageError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn delete(&self, key: &[u8]) -> Result<(), StorageError>;

    /// Check if a key exists.
    fn exists(&self, key: &[u8]) -> Result<bool, StorageError> {
        Ok(self.get(key)?.is_some())
    }

    /// Flush any buffered data to disk (if applicable).
    fn flush(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
