//! Error types for augmented-matrix construction and row operations.

use thiserror::Error;

/// Everything that can go wrong constructing or operating on an
/// [`crate::AugmentedMatrix`].
///
/// All checks run before any mutation, so a returned error means the matrix
/// is exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Malformed construction arguments: an empty coefficient matrix,
    /// ragged rows, or a constants vector that does not match the row
    /// count. Fatal to construction; no matrix is produced.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A concrete row or column index outside the matrix bounds.
    #[error("{axis} index {index} is out of range (0..{bound})")]
    IndexOutOfRange {
        axis: &'static str,
        index: usize,
        bound: usize,
    },

    /// Operation parameters that are illegal regardless of matrix shape:
    /// scaling a row by zero, or adding a row onto itself.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}
