//! State storage traits.
//!
//! These traits are the only way operations touch the ledger. The hosting
//! platform supplies the implementation; operations never cache a value
//! across invocations.

use crate::error::StoreResult;

/// Read access to ledger state.
pub trait StateReader {
    /// Get the raw value stored under `key`, or `None` if it was never written.
    fn get_state(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;
}

/// Mutable access to ledger state.
///
/// Writes are applied one at a time. Grouping several writes into one atomic
/// commit is the platform's business, not this trait's.
pub trait StateWriter: StateReader {
    /// Store `value` under `key`, replacing any previous value.
    fn put_state(&mut self, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Remove `key`. Removing an absent key succeeds.
    fn del_state(&mut self, key: &str) -> StoreResult<()>;
}

impl<S: StateReader + ?Sized> StateReader for &mut S {
    fn get_state(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        (**self).get_state(key)
    }
}

impl<S: StateWriter + ?Sized> StateWriter for &mut S {
    fn put_state(&mut self, key: &str, value: &[u8]) -> StoreResult<()> {
        (**self).put_state(key, value)
    }

    fn del_state(&mut self, key: &str) -> StoreResult<()> {
        (**self).del_state(key)
    }
}
