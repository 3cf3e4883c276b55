//! In-memory key-value backend for testing.

use std::collections::BTreeMap;
use std::sync::RwLock;

use super::KvBackend;
use crate::error::StorageError;

/// In-memory key-value backend using a BTreeMap.
///
/// This implementation is thread-safe. Useful for testing and for hosts
/// running without a data directory.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    data: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl MemoryBackend {
    /// Create a new empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of entries in the store.
    pub fn len(&self) -> Result<usize, StorageError> {
        Ok(self.data.read()?.len())
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.data.read()?.is_empty())
    }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.data.read()?.get(key).cloned())
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StorageError> {
        self.data.write()?.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &[u8]) -> Result<(), StorageError> {
        self.data.write()?.remove(key);
        Ok(())
    }
}
