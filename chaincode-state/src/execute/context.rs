//! Execution context for invocation processing.

use uuid::Uuid;

/// Channel name used when the host does not supply one.
pub const DEFAULT_CHANNEL: &str = "modbuschannel";

/// Chaincode name used when the host does not supply one.
pub const DEFAULT_CHAINCODE_NAME: &str = "example_cc";

/// Execution context carrying invocation-level metadata.
///
/// This context is passed to every operation handler. It carries no domain
/// data; its fields only tag log output so that all lines emitted for one
/// invocation can be correlated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionContext {
    /// Correlation identifier for this invocation.
    pub correlation_id: String,

    /// Channel the chaincode is deployed on.
    pub channel: String,

    /// Deployed chaincode name.
    pub chaincode: String,
}

impl ExecutionContext {
    /// Create a new execution context with a freshly generated correlation id.
    pub fn new(channel: impl Into<String>, chaincode: impl Into<String>) -> Self {
        Self {
            correlation_id: Uuid::new_v4().to_string(),
            channel: channel.into(),
            chaincode: chaincode.into(),
        }
    }

    /// Replace the correlation id with one supplied by the caller.
    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = correlation_id.into();
        self
    }

    /// Use the caller's correlation id if present, keeping the generated one otherwise.
    pub fn with_optional_correlation_id(self, correlation_id: Option<String>) -> Self {
        match correlation_id {
            Some(id) => self.with_correlation_id(id),
            None => self,
        }
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL, DEFAULT_CHAINCODE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_uuids() {
        let ctx = ExecutionContext::default();
        assert!(Uuid::parse_str(&ctx.correlation_id).is_ok());
        assert_eq!(ctx.channel, DEFAULT_CHANNEL);
        assert_eq!(ctx.chaincode, DEFAULT_CHAINCODE_NAME);
    }

    #[test]
    fn test_generated_ids_differ() {
        let a = ExecutionContext::default();
        let b = ExecutionContext::default();
        assert_ne!(a.correlation_id, b.correlation_id);
    }

    #[test]
    fn test_caller_supplied_id() {
        let ctx = ExecutionContext::new("ch", "cc").with_correlation_id("req-42");
        assert_eq!(ctx.correlation_id, "req-42");

        let ctx = ExecutionContext::new("ch", "cc").with_optional_correlation_id(None);
        assert!(Uuid::parse_str(&ctx.correlation_id).is_ok());
    }
}
