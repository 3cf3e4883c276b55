//! Instantiation handler.
//!
//! Seeds two entities with their starting balances.

use crate::error::{ChaincodeError, ChaincodeResult};
use crate::state::StateWriter;

use super::amount::{encode, parse_amount};
use super::context::ExecutionContext;

/// Arguments: `[nameA, balanceA, nameB, balanceB]`.
pub const INIT_ARG_COUNT: usize = 4;

/// Execute chaincode instantiation.
///
/// # Validation
/// - Exactly four arguments
/// - Both balances parse as base-10 integers
///
/// Both balances are validated before anything is written. The two writes
/// are not atomic: if the second fails, the first stays applied.
pub fn execute_init<S: StateWriter>(
    state: &mut S,
    _ctx: &ExecutionContext,
    args: &[String],
) -> ChaincodeResult<()> {
    let [name_a, raw_a, name_b, raw_b] = args else {
        return Err(ChaincodeError::arity(INIT_ARG_COUNT, args));
    };

    let balance_a = parse_amount(raw_a)?;
    let balance_b = parse_amount(raw_b)?;

    tracing::info!(
        a = balance_a,
        b = balance_b,
        "initializing chaincode with Aval = {balance_a}, Bval = {balance_b}"
    );

    put_balance(state, name_a, balance_a)?;
    put_balance(state, name_b, balance_b)?;

    tracing::info!("state written to the ledger");
    Ok(())
}

/// Write a balance, mapping store failures.
pub(crate) fn put_balance<S: StateWriter>(
    state: &mut S,
    name: &str,
    balance: i64,
) -> ChaincodeResult<()> {
    state
        .put_state(name, &encode(balance))
        .map_err(|source| ChaincodeError::StateWriteFailure {
            key: name.to_string(),
            source,
        })
}
