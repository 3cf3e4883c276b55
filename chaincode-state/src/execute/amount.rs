//! Decimal encoding of balances.

use crate::error::{ChaincodeError, ChaincodeResult};

/// Parse a caller-supplied amount as a base-10 signed integer.
pub(crate) fn parse_amount(raw: &str) -> ChaincodeResult<i64> {
    raw.parse::<i64>().map_err(|_| {
        ChaincodeError::invalid_numeric(format!("expecting integer value, got {raw:?}"))
    })
}

/// Parse a stored balance.
///
/// Stored values are only ever written by this chaincode, so they are not
/// re-validated: anything unparsable reads as zero.
pub(crate) fn parse_stored(key: &str, bytes: &[u8]) -> i64 {
    match std::str::from_utf8(bytes).ok().and_then(|s| s.parse::<i64>().ok()) {
        Some(value) => value,
        None => {
            tracing::warn!(key, "stored balance is not an integer, reading as 0");
            0
        }
    }
}

/// Encode a balance for storage.
pub(crate) fn encode(value: i64) -> Vec<u8> {
    value.to_string().into_bytes()
}
