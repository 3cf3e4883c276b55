//! Storage error types.

use chaincode_state::StoreError;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// RocksDB error.
    #[error("RocksDB error: {0}")]
    RocksDb(String),

    /// A lock guarding backend data was poisoned by a panicking writer.
    #[error("Lock poisoned: {0}")]
    Poisoned(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "rocksdb")]
impl From<rocksdb::Error> for StorageError {
    fn from(e: rocksdb::Error) -> Self {
        StorageError::RocksDb(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for StorageError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        StorageError::Poisoned(e.to_string())
    }
}

impl From<StorageError> for StoreError {
    fn from(e: StorageError) -> Self {
        StoreError::new(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converts_to_store_error() {
        let err: StoreError = StorageError::RocksDb("corruption".to_string()).into();
        assert_eq!(err.message(), "RocksDB error: corruption");
    }
}
