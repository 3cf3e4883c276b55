//! Invocation executor - main entry point for state transitions.
//!
//! This module contains the dispatcher, which routes a function name to its
//! handler, and [`Chaincode`], the service object a host keeps for the life
//! of the process.

use crate::error::{ChaincodeError, ChaincodeResult};
use crate::logging::{invocation_span, InvocationLogger, TracingLogger};
use crate::state::StateWriter;

use super::context::ExecutionContext;
use super::delete::execute_delete;
use super::function::Function;
use super::init::execute_init;
use super::query::execute_query;
use super::transfer::execute_transfer;

/// Operation name used for instantiation in logs.
pub const INIT_OPERATION: &str = "init";

/// Apply chaincode instantiation to the ledger state.
pub fn apply_init<S: StateWriter>(
    state: &mut S,
    ctx: &ExecutionContext,
    args: &[String],
) -> ChaincodeResult<()> {
    execute_init(state, ctx, args)
}

/// Apply an invocation by function name.
///
/// The name is resolved before the state is touched, so an unknown name
/// fails with [`ChaincodeError::UnknownOperation`] without any reads or
/// writes.
///
/// # Returns
/// - `Ok(payload)`: empty for delete, the destination balance for a
///   transfer, a JSON document for a query
/// - `Err(ChaincodeError)` if validation or a store access failed
pub fn apply_invocation<S: StateWriter>(
    state: &mut S,
    ctx: &ExecutionContext,
    function: &str,
    args: &[String],
) -> ChaincodeResult<Vec<u8>> {
    let function: Function = function.parse()?;
    dispatch(state, ctx, function, args)
}

/// Route a resolved function to its handler.
pub fn dispatch<S: StateWriter>(
    state: &mut S,
    ctx: &ExecutionContext,
    function: Function,
    args: &[String],
) -> ChaincodeResult<Vec<u8>> {
    match function {
        Function::Transfer => execute_transfer(state, ctx, args),
        Function::Delete => {
            execute_delete(state, ctx, args)?;
            Ok(Vec::new())
        }
        Function::Query => execute_query(state, ctx, args),
    }
}

/// The chaincode service.
///
/// Holds no ledger data; state is passed in on every call. One instance is
/// constructed at start-up and shared across invocations.
#[derive(Clone, Debug, Default)]
pub struct Chaincode<L: InvocationLogger = TracingLogger> {
    logger: L,
}

impl Chaincode {
    /// Create a chaincode that logs through `tracing`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: InvocationLogger> Chaincode<L> {
    /// Create a chaincode with a custom invocation logger.
    pub fn with_logger(logger: L) -> Self {
        Self { logger }
    }

    /// The invocation logger.
    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// Run instantiation.
    pub fn init<S: StateWriter>(
        &self,
        state: &mut S,
        ctx: &ExecutionContext,
        args: &[String],
    ) -> ChaincodeResult<()> {
        let span = invocation_span(ctx, INIT_OPERATION);
        let _guard = span.enter();

        self.logger.started(ctx, INIT_OPERATION);
        let result = apply_init(state, ctx, args);
        match &result {
            Ok(()) => self.logger.succeeded(ctx, INIT_OPERATION, &[]),
            Err(e) => self.logger.failed(ctx, INIT_OPERATION, e),
        }
        result
    }

    /// Run one invocation routed by function name.
    pub fn invoke<S: StateWriter>(
        &self,
        state: &mut S,
        ctx: &ExecutionContext,
        function: &str,
        args: &[String],
    ) -> ChaincodeResult<Vec<u8>> {
        let span = invocation_span(ctx, function);
        let _guard = span.enter();

        self.logger.started(ctx, function);
        let result = apply_invocation(state, ctx, function, args);
        self.report(ctx, function, &result);
        result
    }

    fn report(&self, ctx: &ExecutionContext, operation: &str, result: &ChaincodeResult<Vec<u8>>) {
        match result {
            Ok(payload) => self.logger.succeeded(ctx, operation, payload),
            Err(e) => self.logger.failed(ctx, operation, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::error::ErrorKind;
    use crate::response::QueryResponse;
    use crate::state::LedgerState;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<(String, String, String)>>,
    }

    impl RecordingLogger {
        fn push(&self, ctx: &ExecutionContext, operation: &str, what: &str) {
            self.events.lock().unwrap().push((
                ctx.correlation_id.clone(),
                operation.to_string(),
                what.to_string(),
            ));
        }
    }

    impl InvocationLogger for RecordingLogger {
        fn started(&self, ctx: &ExecutionContext, operation: &str) {
            self.push(ctx, operation, "started");
        }

        fn succeeded(&self, ctx: &ExecutionContext, operation: &str, _payload: &[u8]) {
            self.push(ctx, operation, "succeeded");
        }

        fn failed(&self, ctx: &ExecutionContext, operation: &str, error: &ChaincodeError) {
            self.push(ctx, operation, error.code());
        }
    }

    #[test]
    fn test_dispatch_routes_each_function() {
        let mut state = LedgerState::new();
        let ctx = ExecutionContext::default();
        apply_init(&mut state, &ctx, &args(&["a", "10", "b", "20"])).unwrap();

        let payload =
            apply_invocation(&mut state, &ctx, "invoke", &args(&["a", "b", "5"])).unwrap();
        assert_eq!(payload, b"25".to_vec());

        let payload = apply_invocation(&mut state, &ctx, "query", &args(&["a"])).unwrap();
        assert_eq!(QueryResponse::from_payload(&payload).unwrap().amount, "5");

        let payload = apply_invocation(&mut state, &ctx, "delete", &args(&["a"])).unwrap();
        assert!(payload.is_empty());
        assert!(state.value_str("a").is_none());
    }

    #[test]
    fn test_unknown_function() {
        let mut state = LedgerState::new();
        let ctx = ExecutionContext::default();

        let err = apply_invocation(&mut state, &ctx, "unknown", &args(&["a"])).unwrap_err();

        assert_eq!(
            err,
            ChaincodeError::UnknownOperation {
                function: "unknown".to_string()
            }
        );
    }

    #[test]
    fn test_init_is_not_dispatchable() {
        let mut state = LedgerState::new();
        let ctx = ExecutionContext::default();

        let err =
            apply_invocation(&mut state, &ctx, "init", &args(&["a", "1", "b", "2"])).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnknownOperation);
        assert!(state.is_empty());
    }

    #[test]
    fn test_chaincode_reports_to_logger() {
        let chaincode = Chaincode::with_logger(RecordingLogger::default());
        let mut state = LedgerState::new();
        let ctx = ExecutionContext::default().with_correlation_id("req-1");

        chaincode
            .init(&mut state, &ctx, &args(&["a", "1", "b", "2"]))
            .unwrap();
        chaincode
            .invoke(&mut state, &ctx, "query", &args(&["missing"]))
            .unwrap_err();

        let event = |operation: &str, what: &str| {
            ("req-1".to_string(), operation.to_string(), what.to_string())
        };
        let events = chaincode.logger().events.lock().unwrap().clone();
        assert_eq!(
            events,
            vec![
                event("init", "started"),
                event("init", "succeeded"),
                event("query", "started"),
                event("query", "INVALID_NUMERIC_ARGUMENT"),
            ]
        );
    }

    #[test]
    fn test_chaincode_is_reusable_after_failure() {
        let chaincode = Chaincode::new();
        let mut state = LedgerState::new();
        let ctx = ExecutionContext::default();

        chaincode
            .init(&mut state, &ctx, &args(&["a", "1"]))
            .unwrap_err();
        chaincode
            .init(&mut state, &ctx, &args(&["a", "1", "b", "2"]))
            .unwrap();

        let payload = chaincode
            .invoke(&mut state, &ctx, "invoke", &args(&["b", "a", "2"]))
            .unwrap();
        assert_eq!(payload, b"3".to_vec());
    }
}
