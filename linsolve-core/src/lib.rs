//! linsolve-core: Gauss-Jordan elimination on an augmented coefficient matrix.
//!
//! The whole engine is [`AugmentedMatrix`]: dense `[A | b]` storage for a
//! linear system, the elementary row operations (swap, scale,
//! add-scaled-row), and the in-place reduction to reduced row-echelon form
//! built by composing them.

pub mod augmented;
pub mod error;
pub mod reduce;

pub use augmented::{AugmentedMatrix, Index, View};
pub use error::MatrixError;
