//! Error types for matriz operations.
//!
//! Every failure in the crate is reported to the immediate caller as an
//! `Err` value; nothing in the library panics or aborts. A harness decides
//! whether to stop or continue on failure.

use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatrizError>;

/// Main error type for matriz operations.
///
/// Provides the context needed to diagnose a failure: which index was out of
/// range, which shapes were incompatible, which slot was never set.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::DimensionMismatch {
///     expected: "2x3".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrizError {
    /// A vector cannot be constructed with zero capacity.
    InvalidCapacity {
        /// Capacity that was requested
        capacity: usize,
    },

    /// A matrix cannot be constructed with a zero dimension.
    InvalidShape {
        /// Requested row count
        rows: usize,
        /// Requested column count
        columns: usize,
    },

    /// Operand lengths/dimensions are incompatible for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Vector index outside `[0, capacity)`.
    IndexOutOfBounds {
        /// Index that was requested
        index: usize,
        /// Capacity of the vector
        capacity: usize,
    },

    /// Matrix position outside the valid `(row, column)` range.
    PositionOutOfBounds {
        /// Row that was requested
        row: usize,
        /// Column that was requested
        column: usize,
        /// Row count of the matrix
        rows: usize,
        /// Column count of the matrix
        columns: usize,
    },

    /// A slot was read before any value was stored in it.
    ///
    /// Distinct from [`MatrizError::IndexOutOfBounds`]: the position is
    /// valid, the slot is just empty.
    EmptySlot {
        /// Index of the empty slot
        index: usize,
    },

    /// Serialization/deserialization error.
    Serialization(String),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::InvalidCapacity { capacity } => {
                write!(f, "Invalid vector capacity: {capacity}, must be > 0")
            }
            MatrizError::InvalidShape { rows, columns } => {
                write!(
                    f,
                    "Invalid matrix shape: {rows}x{columns}, both dimensions must be > 0"
                )
            }
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            MatrizError::IndexOutOfBounds { index, capacity } => {
                write!(
                    f,
                    "Index out of bounds: {index}, vector capacity is {capacity}"
                )
            }
            MatrizError::PositionOutOfBounds {
                row,
                column,
                rows,
                columns,
            } => {
                write!(
                    f,
                    "Position out of bounds: ({row}, {column}), matrix shape is {rows}x{columns}"
                )
            }
            MatrizError::EmptySlot { index } => {
                write!(f, "Empty slot at index {index}: no value was ever set")
            }
            MatrizError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            MatrizError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MatrizError {}

impl From<&str> for MatrizError {
    fn from(msg: &str) -> Self {
        MatrizError::Other(msg.to_string())
    }
}

impl From<String> for MatrizError {
    fn from(msg: String) -> Self {
        MatrizError::Other(msg)
    }
}
