//! Ledger state over a key-value backend.
//!
//! [`KvState`] implements the `StateReader` and `StateWriter` traits from
//! `chaincode-state`, so a host can run the chaincode directly against any
//! [`KvBackend`].

use std::sync::Arc;

use chaincode_state::{StateReader, StateWriter, StoreResult};

use crate::kv::KvBackend;

/// Ledger state backed by a shared key-value backend.
///
/// ## Usage
///
/// ```ignore
/// let backend = Arc::new(RocksBackend::open("state.db")?);
/// let mut state = KvState::new(backend);
///
/// chaincode.init(&mut state, &ctx, &args)?;
/// ```
pub struct KvState<B: KvBackend + ?Sized> {
    backend: Arc<B>,
}

impl<B: KvBackend + ?Sized> KvState<B> {
    /// Wrap a backend.
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Get the backend.
    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }
}

impl<B: KvBackend + ?Sized> Clone for KvState<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B: KvBackend + ?Sized> StateReader for KvState<B> {
    fn get_state(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.backend.get(key.as_bytes())?)
    }
}

impl<B: KvBackend + ?Sized> StateWriter for KvState<B> {
    fn put_state(&mut self, key: &str, value: &[u8]) -> StoreResult<()> {
        Ok(self.backend.put(key.as_bytes(), value)?)
    }

    fn del_state(&mut self, key: &str) -> StoreResult<()> {
        Ok(self.backend.delete(key.as_bytes())?)
    }
}
