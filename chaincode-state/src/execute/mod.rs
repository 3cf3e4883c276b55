//! Invocation execution module.
//!
//! This module contains the dispatcher and all operation-specific
//! validation and execution logic.

mod amount;
mod context;
mod delete;
mod executor;
mod function;
mod init;
mod query;
mod transfer;

pub use context::{ExecutionContext, DEFAULT_CHAINCODE_NAME, DEFAULT_CHANNEL};
pub use delete::{execute_delete, DELETE_ARG_COUNT};
pub use executor::{apply_init, apply_invocation, dispatch, Chaincode, INIT_OPERATION};
pub use function::Function;
pub use init::{execute_init, INIT_ARG_COUNT};
pub use query::{execute_query, QUERY_ARG_COUNT};
pub use transfer::{execute_transfer, TRANSFER_ARG_COUNT};
