//! In-memory ledger state container.

use std::collections::BTreeMap;

use crate::error::StoreResult;

use super::store::{StateReader, StateWriter};

/// In-memory ledger state backed by a BTreeMap.
///
/// This is the testing and development implementation. Persistent backends
/// in `chaincode-storage` implement the same traits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerState {
    /// All stored entries, keyed by entity name.
    pub entries: BTreeMap<String, Vec<u8>>,
}

impl LedgerState {
    /// Create a new empty ledger state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw value for `key` as text, for inspection in tests and tooling.
    pub fn value_str(&self, key: &str) -> Option<String> {
        self.entries
            .get(key)
            .map(|v| String::from_utf8_lossy(v).into_owned())
    }
}

impl StateReader for LedgerState {
    fn get_state(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }
}

impl StateWriter for LedgerState {
    fn put_state(&mut self, key: &str, value: &[u8]) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn del_state(&mut self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
