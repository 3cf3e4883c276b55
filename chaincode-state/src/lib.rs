//! State transition function for the balance chaincode.
//!
//! This crate implements the chaincode's transaction logic. Given the
//! ledger's key/value state and an invocation, it validates the arguments,
//! reads and writes entity balances and returns a payload or a typed error.
//! Storage, consensus and transport belong to the hosting platform.
//!
//! # Key Components
//!
//! - [`Chaincode`]: Stateless service routing invocations to handlers
//! - [`StateReader`]/[`StateWriter`]: Traits abstracting ledger state access
//! - [`LedgerState`]: In-memory state for tests and development
//! - [`ChaincodeError`]: Error taxonomy surfaced to the platform
//! - [`InvocationLogger`]: Hooks tagging each invocation with a correlation id
//!
//! # Example
//!
//! ```
//! use chaincode_state::{Chaincode, ExecutionContext, LedgerState};
//!
//! let chaincode = Chaincode::new();
//! let mut state = LedgerState::new();
//! let ctx = ExecutionContext::default();
//!
//! let init: Vec<String> = ["alice", "100", "bob", "200"].map(String::from).to_vec();
//! chaincode.init(&mut state, &ctx, &init).unwrap();
//!
//! let transfer: Vec<String> = ["alice", "bob", "10"].map(String::from).to_vec();
//! let payload = chaincode.invoke(&mut state, &ctx, "invoke", &transfer).unwrap();
//! assert_eq!(payload, b"210");
//! ```

mod error;
mod execute;
mod logging;
mod response;
mod state;

pub use error::{ChaincodeError, ChaincodeResult, ErrorKind, StoreError, StoreResult};
pub use execute::{
    apply_init, apply_invocation, dispatch, execute_delete, execute_init, execute_query,
    execute_transfer, Chaincode, ExecutionContext, Function, DEFAULT_CHAINCODE_NAME,
    DEFAULT_CHANNEL, DELETE_ARG_COUNT, INIT_ARG_COUNT, INIT_OPERATION, QUERY_ARG_COUNT,
    TRANSFER_ARG_COUNT,
};
pub use logging::{invocation_span, InvocationLogger, NoopLogger, TracingLogger};
pub use response::{InvocationResponse, QueryResponse, STATUS_ERROR, STATUS_OK};
pub use state::{LedgerState, StateReader, StateWriter};
