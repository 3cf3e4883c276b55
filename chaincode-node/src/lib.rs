//! Balance chaincode host library.
//!
//! This library provides the pieces of the `chaincode-node` binary: argument
//! parsing, configuration and the host that runs one invocation against a
//! state backend. It is also used for testing and embedding.

pub mod cli;
pub mod config;
pub mod host;
