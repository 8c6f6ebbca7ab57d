//! linsolve-io: Text input for the linsolve solver.
//!
//! Parses the two plain-text input files — coefficient rows and constants —
//! into the numeric sequences the core consumes. No shape validation
//! happens here; that belongs to the matrix constructor.

pub mod system;

pub use system::{parse_coefficients, parse_constants, LinearSystem};
