//! Invocation logging hooks.
//!
//! Every invocation runs inside an `invocation` span tagged with the
//! correlation id, channel and chaincode name from its
//! [`ExecutionContext`], so events emitted by the handlers carry the same
//! tags. The [`InvocationLogger`] hooks bracket the invocation; they observe
//! outcomes and never influence them.

use tracing::Span;

use crate::error::ChaincodeError;
use crate::execute::ExecutionContext;

/// Observer notified at the start and end of each invocation.
pub trait InvocationLogger: Send + Sync {
    /// The invocation is about to run `operation`.
    fn started(&self, ctx: &ExecutionContext, operation: &str);

    /// `operation` completed and produced `payload`.
    fn succeeded(&self, ctx: &ExecutionContext, operation: &str, payload: &[u8]);

    /// `operation` failed with `error`.
    fn failed(&self, ctx: &ExecutionContext, operation: &str, error: &ChaincodeError);
}

/// Logger that emits `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl InvocationLogger for TracingLogger {
    fn started(&self, ctx: &ExecutionContext, operation: &str) {
        tracing::info!(
            correlation_id = %ctx.correlation_id,
            operation,
            "{} {operation}",
            ctx.chaincode
        );
    }

    fn succeeded(&self, ctx: &ExecutionContext, operation: &str, payload: &[u8]) {
        tracing::info!(
            correlation_id = %ctx.correlation_id,
            operation,
            payload_len = payload.len(),
            "{operation} succeeded"
        );
    }

    fn failed(&self, ctx: &ExecutionContext, operation: &str, error: &ChaincodeError) {
        tracing::error!(
            correlation_id = %ctx.correlation_id,
            operation,
            code = error.code(),
            "{operation} failed: {error}"
        );
    }
}

/// Logger that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopLogger;

impl InvocationLogger for NoopLogger {
    fn started(&self, _ctx: &ExecutionContext, _operation: &str) {}

    fn succeeded(&self, _ctx: &ExecutionContext, _operation: &str, _payload: &[u8]) {}

    fn failed(&self, _ctx: &ExecutionContext, _operation: &str, _error: &ChaincodeError) {}
}

impl<L: InvocationLogger + ?Sized> InvocationLogger for std::sync::Arc<L> {
    fn started(&self, ctx: &ExecutionContext, operation: &str) {
        (**self).started(ctx, operation);
    }

    fn succeeded(&self, ctx: &ExecutionContext, operation: &str, payload: &[u8]) {
        (**self).succeeded(ctx, operation, payload);
    }

    fn failed(&self, ctx: &ExecutionContext, operation: &str, error: &ChaincodeError) {
        (**self).failed(ctx, operation, error);
    }
}

/// Span covering one invocation.
pub fn invocation_span(ctx: &ExecutionContext, operation: &str) -> Span {
    tracing::info_span!(
        "invocation",
        correlation_id = %ctx.correlation_id,
        channel = %ctx.channel,
        chaincode = %ctx.chaincode,
        operation
    )
}
