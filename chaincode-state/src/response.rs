//! Payload and response types.

use serde::{Deserialize, Serialize};

use crate::error::ChaincodeResult;

/// Status reported for a successful invocation.
pub const STATUS_OK: u16 = 200;

/// Status reported for a failed invocation.
pub const STATUS_ERROR: u16 = 500;

/// Query result for one entity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Entity name as queried.
    #[serde(rename = "Name")]
    pub name: String,
    /// Stored value, verbatim.
    #[serde(rename = "Amount")]
    pub amount: String,
}

impl QueryResponse {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }

    /// Encode as the JSON payload returned to the caller.
    ///
    /// Keys appear in field order, `Name` then `Amount`.
    pub fn to_payload(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Decode a payload produced by [`QueryResponse::to_payload`].
    pub fn from_payload(payload: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(payload)
    }
}

/// Outcome of one invocation as reported to the host.
///
/// Success carries the payload as text; failure carries the error code and
/// message with an empty payload. Exactly one of the two is meaningful,
/// selected by `status`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResponse {
    /// [`STATUS_OK`] or [`STATUS_ERROR`].
    pub status: u16,
    /// Error code, present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Error message, empty on success.
    pub message: String,
    /// Operation payload, empty on failure.
    pub payload: String,
}

impl InvocationResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}

impl From<ChaincodeResult<Vec<u8>>> for InvocationResponse {
    fn from(result: ChaincodeResult<Vec<u8>>) -> Self {
        match result {
            Ok(payload) => Self {
                status: STATUS_OK,
                code: None,
                message: String::new(),
                payload: String::from_utf8_lossy(&payload).into_owned(),
            },
            Err(e) => Self {
                status: STATUS_ERROR,
                code: Some(e.code().to_string()),
                message: e.to_string(),
                payload: String::new(),
            },
        }
    }
}

impl From<ChaincodeResult<()>> for InvocationResponse {
    fn from(result: ChaincodeResult<()>) -> Self {
        result.map(|()| Vec::<u8>::new()).into()
    }
}
