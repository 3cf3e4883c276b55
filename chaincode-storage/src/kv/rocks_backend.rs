//! RocksDB key-value backend for production use.

use std::path::Path;
use std::sync::Arc;

use rocksdb::{Options, DB};

use super::KvBackend;
use crate::error::StorageError;

/// RocksDB-based key-value backend.
///
/// This implementation provides persistent, crash-safe storage for ledger
/// state that must survive host restarts.
pub struct RocksBackend {
    db: Arc<DB>,
}

impl RocksBackend {
    /// Open or create a RocksDB database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.set_compression_type(rocksdb::DBCompressionType::Lz4);

        // Ledger state is small and point-accessed
        opts.set_write_buffer_size(8 * 1024 * 1024); // 8MB
        opts.set_max_write_buffer_number(2);

        let db = DB::open(&opts, path)?;
        tracing::debug!(path = %path.display(), "opened RocksDB state store");
        Ok(Self { db: Arc::new(db) })
    }
}

impl KvBackend for RocksBackend {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.db.get(key)?)
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StorageError> {
        self.db.put(key, value)?;
        Ok(())
    }

    fn delete(&self, key: &[u8]) -> Result<(), StorageError> {
        self.db.delete(key)?;
        Ok(())
    }

    fn flush(&self) -> Result<(), StorageError> {
        self.db.flush()?;
        Ok(())
    }
}
