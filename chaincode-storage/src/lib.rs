//! # Chaincode Storage
//!
//! Key-value storage backends for the balance chaincode.
//!
//! This crate provides:
//! - The [`KvBackend`] abstraction over byte-keyed stores
//! - An in-memory backend for tests and ephemeral hosts
//! - A disk-backed backend via RocksDB (`rocksdb` feature, on by default)
//! - [`KvState`], which exposes any backend through the `StateReader` and
//!   `StateWriter` traits from `chaincode-state`
//!
//! ## Architecture
//!
//! Entity names are used verbatim as keys (their UTF-8 bytes) and balances
//! are stored exactly as the chaincode writes them. Each primitive is applied
//! immediately; there is no buffering or commit step at this layer.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod kv;
pub mod state;

pub use error::StorageError;
pub use kv::{KvBackend, MemoryBackend};
#[cfg(feature = "rocksdb")]
pub use kv::RocksBackend;
pub use state::KvState;
