//! Error types for wrapper operations

use thiserror::Error;

use crate::runtime::Kind;

/// Main error type for rcwrap operations
#[derive(Error, Debug)]
pub enum RcWrapError {
    /// Indexed access beyond the current element count
    #[error("Index out of range: {index} (count {count})")]
    OutOfRange {
        /// The requested index
        index: usize,
        /// Element count at the time of the call
        count: usize,
    },

    /// A handle or object did not have the expected resource kind
    #[error("Type error: expected {expected}, got {got}")]
    TypeMismatch {
        /// Expected kind
        expected: Kind,
        /// Actual kind received
        got: Kind,
    },

    /// Creating the underlying storage failed
    #[error("Allocation failed: {0}")]
    Allocation(String),

    /// A value the serialized-tree format cannot represent
    #[error("Unsupported value: {0}")]
    Unsupported(String),

    /// File system failure
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Text document encoding or decoding failure
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Binary document encoding or decoding failure
    #[error(transparent)]
    Binary(#[from] bincode::Error),
}

impl RcWrapError {
    /// Build an `OutOfRange` error.
    pub fn out_of_range(index: usize, count: usize) -> Self {
        RcWrapError::OutOfRange { index, count }
    }

    /// Build a `TypeMismatch` error.
    pub fn type_mismatch(expected: Kind, got: Kind) -> Self {
        RcWrapError::TypeMismatch { expected, got }
    }
}

impl From<std::collections::TryReserveError> for RcWrapError {
    fn from(value: std::collections::TryReserveError) -> Self {
        RcWrapError::Allocation(value.to_string())
    }
}

/// Result type alias for rcwrap operations
pub type Result<T> = std::result::Result<T, RcWrapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = RcWrapError::out_of_range(5, 2);
        assert_eq!(err.to_string(), "Index out of range: 5 (count 2)");
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = RcWrapError::type_mismatch(Kind::Array, Kind::Dictionary);
        assert_eq!(err.to_string(), "Type error: expected array, got dictionary");
    }
}
