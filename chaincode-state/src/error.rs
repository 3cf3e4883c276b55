//! Error types for chaincode invocations.

use thiserror::Error;

/// Failure reported by the external key/value store.
///
/// The store is a collaborator owned by the hosting platform; its failures
/// are carried through opaquely as a message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    /// Create a store error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message reported by the store.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for store primitives.
pub type StoreResult<T> = Result<T, StoreError>;

/// Every way an invocation can fail.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChaincodeError {
    /// Argument list has the wrong arity for the operation.
    #[error("incorrect number of arguments: expecting {expected}, got {actual}")]
    WrongArgumentCount { expected: usize, actual: usize },

    /// An argument (or a missing stored amount) could not be read as an integer.
    #[error("invalid numeric argument: {detail}")]
    InvalidNumericArgument { detail: String },

    /// A referenced entity has never been written.
    #[error("entity not found: {name}")]
    EntityNotFound { name: String },

    /// The store failed to read a key.
    #[error("failed to get state for {key}: {source}")]
    StateReadFailure { key: String, source: StoreError },

    /// The store failed to write a key.
    #[error("failed to put state for {key}: {source}")]
    StateWriteFailure { key: String, source: StoreError },

    /// The store failed to delete a key.
    #[error("failed to delete state for {key}: {source}")]
    StateDeleteFailure { key: String, source: StoreError },

    /// The function name is not one the dispatcher routes.
    #[error("invalid invoke function name {function:?}: expecting \"invoke\" \"delete\" \"query\"")]
    UnknownOperation { function: String },
}

impl ChaincodeError {
    /// The kind of this error, without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChaincodeError::WrongArgumentCount { .. } => ErrorKind::WrongArgumentCount,
            ChaincodeError::InvalidNumericArgument { .. } => ErrorKind::InvalidNumericArgument,
            ChaincodeError::EntityNotFound { .. } => ErrorKind::EntityNotFound,
            ChaincodeError::StateReadFailure { .. } => ErrorKind::StateReadFailure,
            ChaincodeError::StateWriteFailure { .. } => ErrorKind::StateWriteFailure,
            ChaincodeError::StateDeleteFailure { .. } => ErrorKind::StateDeleteFailure,
            ChaincodeError::UnknownOperation { .. } => ErrorKind::UnknownOperation,
        }
    }

    /// Stable error code, shorthand for `self.kind().code()`.
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    pub(crate) fn invalid_numeric(detail: impl Into<String>) -> Self {
        ChaincodeError::InvalidNumericArgument {
            detail: detail.into(),
        }
    }

    pub(crate) fn arity(expected: usize, args: &[String]) -> Self {
        ChaincodeError::WrongArgumentCount {
            expected,
            actual: args.len(),
        }
    }
}

/// Discriminant of [`ChaincodeError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    WrongArgumentCount,
    InvalidNumericArgument,
    EntityNotFound,
    StateReadFailure,
    StateWriteFailure,
    StateDeleteFailure,
    UnknownOperation,
}

impl ErrorKind {
    /// Stable string code used in logs and host responses.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::WrongArgumentCount => "WRONG_ARGUMENT_COUNT",
            ErrorKind::InvalidNumericArgument => "INVALID_NUMERIC_ARGUMENT",
            ErrorKind::EntityNotFound => "ENTITY_NOT_FOUND",
            ErrorKind::StateReadFailure => "STATE_READ_FAILURE",
            ErrorKind::StateWriteFailure => "STATE_WRITE_FAILURE",
            ErrorKind::StateDeleteFailure => "STATE_DELETE_FAILURE",
            ErrorKind::UnknownOperation => "UNKNOWN_OPERATION",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Result type for chaincode operations.
pub type ChaincodeResult<T> = Result<T, ChaincodeError>;
