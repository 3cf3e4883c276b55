//! State access traits and the in-memory state.
//!
//! This module provides:
//! - [`StateReader`]: Read-only access to the ledger's key/value state
//! - [`StateWriter`]: Mutable access to the ledger's key/value state
//! - [`LedgerState`]: In-memory BTreeMap-backed implementation

mod store;
mod ledger_state;

pub use store::{StateReader, StateWriter};
pub use ledger_state::LedgerState;
