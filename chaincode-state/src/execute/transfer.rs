//! Transfer handler (`invoke`).
//!
//! Moves an amount from one entity to another.

use crate::error::{ChaincodeError, ChaincodeResult};
use crate::state::{StateReader, StateWriter};

use super::amount::{encode, parse_amount, parse_stored};
use super::context::ExecutionContext;
use super::init::put_balance;

/// Arguments: `[from, to, amount]`.
pub const TRANSFER_ARG_COUNT: usize = 3;

/// Execute a transfer of `amount` units from `from` to `to`.
///
/// # Validation
/// - Exactly three arguments
/// - Both entities exist (read in order, source first)
/// - Amount parses as a base-10 integer (checked after both reads)
///
/// No bounds are enforced: amounts may be negative, balances may go negative
/// and arithmetic wraps at 64 bits. Writes the source first, then the
/// destination; a failure between the two leaves only the source updated.
///
/// # Returns
/// The destination's new balance as a decimal string.
pub fn execute_transfer<S: StateWriter>(
    state: &mut S,
    _ctx: &ExecutionContext,
    args: &[String],
) -> ChaincodeResult<Vec<u8>> {
    let [from, to, raw_amount] = args else {
        return Err(ChaincodeError::arity(TRANSFER_ARG_COUNT, args));
    };

    let from_balance = read_balance(state, from)?;
    let to_balance = read_balance(state, to)?;

    let amount = parse_amount(raw_amount)?;

    let new_from = from_balance.wrapping_sub(amount);
    let new_to = to_balance.wrapping_add(amount);

    tracing::info!(
        from = new_from,
        to = new_to,
        "Aval = {new_from}, Bval = {new_to} after performing the transaction"
    );

    put_balance(state, from, new_from)?;
    put_balance(state, to, new_to)?;

    tracing::info!(amount, "transaction made payment of {amount} units");
    Ok(encode(new_to))
}

/// Read an existing entity's balance.
fn read_balance<S: StateReader>(state: &S, name: &str) -> ChaincodeResult<i64> {
    let bytes = state
        .get_state(name)
        .map_err(|source| ChaincodeError::StateReadFailure {
            key: name.to_string(),
            source,
        })?
        .ok_or_else(|| ChaincodeError::EntityNotFound {
            name: name.to_string(),
        })?;

    Ok(parse_stored(name, &bytes))
}
