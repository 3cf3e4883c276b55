//! Query handler.

use crate::error::{ChaincodeError, ChaincodeResult, StoreError};
use crate::response::QueryResponse;
use crate::state::StateReader;

use super::context::ExecutionContext;

/// Arguments: `[name]`.
pub const QUERY_ARG_COUNT: usize = 1;

/// Execute a read of one entity's balance.
///
/// A missing entity is reported as [`ChaincodeError::InvalidNumericArgument`]
/// ("nil amount"), not as `EntityNotFound`. Callers rely on that code, so it
/// is kept even though transfer reports the same condition differently.
///
/// # Returns
/// JSON `{"Name": name, "Amount": stored}`. The stored value is embedded
/// as-is when it is valid UTF-8; invalid sequences are replaced with U+FFFD.
pub fn execute_query<S: StateReader>(
    state: &S,
    _ctx: &ExecutionContext,
    args: &[String],
) -> ChaincodeResult<Vec<u8>> {
    let [name] = args else {
        return Err(ChaincodeError::arity(QUERY_ARG_COUNT, args));
    };

    let bytes = state
        .get_state(name)
        .map_err(|source| ChaincodeError::StateReadFailure {
            key: name.clone(),
            source,
        })?
        .ok_or_else(|| ChaincodeError::invalid_numeric(format!("nil amount for {name}")))?;

    let response = QueryResponse::new(name, String::from_utf8_lossy(&bytes));
    let payload = response
        .to_payload()
        .map_err(|e| ChaincodeError::StateReadFailure {
            key: name.clone(),
            source: StoreError::new(format!("encoding query response: {e}")),
        })?;

    tracing::info!(name = %name, amount = %response.amount, "query response");
    Ok(payload)
}
