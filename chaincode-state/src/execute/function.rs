//! Invocation function names.

use std::fmt;
use std::str::FromStr;

use crate::error::ChaincodeError;

/// Operations reachable through generic dispatch.
///
/// Initialization is not listed: it only runs through the instantiation path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    /// Move an amount from one entity to another (`"invoke"`).
    Transfer,
    /// Remove an entity (`"delete"`).
    Delete,
    /// Read an entity's balance (`"query"`).
    Query,
}

impl Function {
    /// Every dispatchable function.
    pub const ALL: [Function; 3] = [Function::Transfer, Function::Delete, Function::Query];

    /// Name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Function::Transfer => "invoke",
            Function::Delete => "delete",
            Function::Query => "query",
        }
    }
}

impl FromStr for Function {
    type Err = ChaincodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "invoke" => Ok(Function::Transfer),
            "delete" => Ok(Function::Delete),
            "query" => Ok(Function::Query),
            other => Err(ChaincodeError::UnknownOperation {
                function: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_wire_names_round_trip() {
        for function in Function::ALL {
            assert_eq!(function.as_str().parse::<Function>().unwrap(), function);
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "unknown".parse::<Function>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownOperation);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!("Invoke".parse::<Function>().is_err());
        assert!("QUERY".parse::<Function>().is_err());
        // Initialization is never dispatched by name
        assert!("init".parse::<Function>().is_err());
    }
}
