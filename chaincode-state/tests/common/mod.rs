//! Shared test helpers for chaincode-state integration tests.

#![allow(dead_code)]

use chaincode_state::{LedgerState, StateReader, StateWriter, StoreError, StoreResult};

/// Build an owned argument vector.
pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Which store primitive a fault applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    Get,
    Put,
    Delete,
}

/// In-memory state that counts every primitive call and can fail the n-th
/// call of one primitive.
#[derive(Debug, Default)]
pub struct RecordingState {
    pub inner: LedgerState,
    pub gets: std::cell::Cell<usize>,
    pub puts: usize,
    pub deletes: usize,
    fault: Option<(Primitive, usize)>,
}

impl RecordingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `nth` (1-based) call of `primitive`.
    pub fn failing_on(primitive: Primitive, nth: usize) -> Self {
        Self {
            fault: Some((primitive, nth)),
            ..Self::default()
        }
    }

    pub fn total_calls(&self) -> usize {
        self.gets.get() + self.puts + self.deletes
    }

    fn check(&self, primitive: Primitive, count: usize) -> StoreResult<()> {
        match self.fault {
            Some((p, nth)) if p == primitive && nth == count => {
                Err(StoreError::new(format!("injected {primitive:?} failure")))
            }
            _ => Ok(()),
        }
    }
}

impl StateReader for RecordingState {
    fn get_state(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        self.gets.set(self.gets.get() + 1);
        self.check(Primitive::Get, self.gets.get())?;
        self.inner.get_state(key)
    }
}

impl StateWriter for RecordingState {
    fn put_state(&mut self, key: &str, value: &[u8]) -> StoreResult<()> {
        self.puts += 1;
        self.check(Primitive::Put, self.puts)?;
        self.inner.put_state(key, value)
    }

    fn del_state(&mut self, key: &str) -> StoreResult<()> {
        self.deletes += 1;
        self.check(Primitive::Delete, self.deletes)?;
        self.inner.del_state(key)
    }
}
