//! Delete handler.

use crate::error::{ChaincodeError, ChaincodeResult};
use crate::state::StateWriter;

use super::context::ExecutionContext;

/// Arguments: `[name]`.
pub const DELETE_ARG_COUNT: usize = 1;

/// Execute deletion of one entity.
///
/// Deleting an entity that does not exist succeeds.
pub fn execute_delete<S: StateWriter>(
    state: &mut S,
    _ctx: &ExecutionContext,
    args: &[String],
) -> ChaincodeResult<()> {
    let [name] = args else {
        return Err(ChaincodeError::arity(DELETE_ARG_COUNT, args));
    };

    state
        .del_state(name)
        .map_err(|source| ChaincodeError::StateDeleteFailure {
            key: name.clone(),
            source,
        })?;

    tracing::info!(name = %name, "entity deleted from state");
    Ok(())
}
