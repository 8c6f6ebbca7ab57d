//! Dense augmented-matrix storage and elementary row operations.
//!
//! [`AugmentedMatrix`] owns the `[A | b]` data for a linear system
//! `A x = b` and exposes the three elementary row operations the reduction
//! in [`crate::reduce`] is built from. Coefficients are stored row-major;
//! the constants column lives in its own vector so a row swap exchanges
//! the coefficient row and its constant as a pair.

use std::fmt;

use crate::error::MatrixError;

/// Per-axis selector for [`AugmentedMatrix::get`]: a concrete index or the
/// whole axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Index {
    /// Every index along this axis, in order.
    All,
    /// A single concrete index.
    At(usize),
}

/// What [`AugmentedMatrix::get`] hands back, shaped by the two selectors.
///
/// Every variant is a copy; mutating it never touches the matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// The full coefficient matrix, rows in order.
    Matrix(Vec<Vec<f64>>),
    /// One coefficient row.
    Row(Vec<f64>),
    /// One coefficient column, values in row order.
    Column(Vec<f64>),
    /// A single coefficient.
    Cell(f64),
}

/// An augmented coefficient matrix `[A | b]` for the system `A x = b`.
///
/// Construction moves the caller's vectors in, so no aliasing survives
/// into the row operations. Every operation validates before it mutates:
/// it either completes, leaving the matrix rectangular, or fails with the
/// matrix untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix {
    rows: usize,
    cols: usize,
    coefficients: Vec<Vec<f64>>,
    constants: Vec<f64>,
}

impl AugmentedMatrix {
    /// Build a matrix from coefficient rows and one constant per row.
    ///
    /// Fails with [`MatrixError::InvalidInput`] when the coefficient matrix
    /// is empty, any row length differs from the first row's, or the
    /// constants count does not equal the row count.
    pub fn new(coefficients: Vec<Vec<f64>>, constants: Vec<f64>) -> Result<Self, MatrixError> {
        let rows = coefficients.len();
        if rows == 0 {
            return Err(MatrixError::InvalidInput {
                reason: "coefficient matrix has no rows".to_string(),
            });
        }

        let cols = coefficients[0].len();
        if cols == 0 {
            return Err(MatrixError::InvalidInput {
                reason: "coefficient matrix has no columns".to_string(),
            });
        }

        for (i, row) in coefficients.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::InvalidInput {
                    reason: format!("row {} has {} columns, expected {}", i, row.len(), cols),
                });
            }
        }

        if constants.len() != rows {
            return Err(MatrixError::InvalidInput {
                reason: format!("{} constants for {} rows", constants.len(), rows),
            });
        }

        Ok(Self {
            rows,
            cols,
            coefficients,
            constants,
        })
    }

    /// Number of equation rows.
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Number of coefficient columns (unknowns).
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Single coefficient at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(self.coefficients[row][col])
    }

    /// Copy of one coefficient row.
    pub fn row(&self, row: usize) -> Result<Vec<f64>, MatrixError> {
        self.check_row(row)?;
        Ok(self.coefficients[row].clone())
    }

    /// Column `col` from every row, in row order.
    ///
    /// Storage is row-major, so this is the one accessor that walks all
    /// rows to assemble its result.
    pub fn column(&self, col: usize) -> Result<Vec<f64>, MatrixError> {
        self.check_col(col)?;
        Ok(self.coefficients.iter().map(|row| row[col]).collect())
    }

    /// Full copy of the coefficient matrix, row/column order preserved.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.coefficients.clone()
    }

    /// Constant (right-hand side) of one row.
    pub fn constant(&self, row: usize) -> Result<f64, MatrixError> {
        self.check_row(row)?;
        Ok(self.constants[row])
    }

    /// All constants, in row order.
    pub fn constants(&self) -> &[f64] {
        &self.constants
    }

    /// Generalized accessor over the coefficient block.
    ///
    /// The selector pair picks the shape: `(All, All)` copies the whole
    /// matrix, `(All, At(c))` a column, `(At(r), All)` a row, and
    /// `(At(r), At(c))` a single cell. Concrete indices out of bounds fail
    /// with [`MatrixError::IndexOutOfRange`].
    pub fn get(&self, row: Index, col: Index) -> Result<View, MatrixError> {
        match (row, col) {
            (Index::All, Index::All) => Ok(View::Matrix(self.to_rows())),
            (Index::All, Index::At(c)) => Ok(View::Column(self.column(c)?)),
            (Index::At(r), Index::All) => Ok(View::Row(self.row(r)?)),
            (Index::At(r), Index::At(c)) => Ok(View::Cell(self.cell(r, c)?)),
        }
    }

    /// Exchange rows `a` and `b`: coefficient rows and constants move as
    /// paired values. Swapping a row with itself is a legal no-op.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), MatrixError> {
        self.check_row(a)?;
        self.check_row(b)?;
        self.swap_unchecked(a, b);
        Ok(())
    }

    /// Multiply every coefficient and the constant of `row` by `scalar`.
    ///
    /// Fails with [`MatrixError::InvalidArgument`] when `scalar` is zero:
    /// zeroing a row destroys information and is never a legitimate
    /// elimination step.
    pub fn scale(&mut self, row: usize, scalar: f64) -> Result<(), MatrixError> {
        self.check_row(row)?;
        if scalar == 0.0 {
            return Err(MatrixError::InvalidArgument {
                reason: "cannot scale a row by 0".to_string(),
            });
        }
        self.scale_unchecked(row, scalar);
        Ok(())
    }

    /// `target <- target + scalar * source`, across coefficients and the
    /// constant; `source` is left unmodified.
    ///
    /// Fails with [`MatrixError::InvalidArgument`] when `source == target`
    /// (self-addition is a scaling in disguise; use [`Self::scale`]).
    pub fn add_scaled_row(
        &mut self,
        source: usize,
        target: usize,
        scalar: f64,
    ) -> Result<(), MatrixError> {
        self.check_row(source)?;
        self.check_row(target)?;
        if source == target {
            return Err(MatrixError::InvalidArgument {
                reason: format!("source and target are both row {source}, use scale instead"),
            });
        }
        self.add_scaled_unchecked(source, target, scalar);
        Ok(())
    }

    fn check_row(&self, index: usize) -> Result<(), MatrixError> {
        if index < self.rows {
            Ok(())
        } else {
            Err(MatrixError::IndexOutOfRange {
                axis: "row",
                index,
                bound: self.rows,
            })
        }
    }

    fn check_col(&self, index: usize) -> Result<(), MatrixError> {
        if index < self.cols {
            Ok(())
        } else {
            Err(MatrixError::IndexOutOfRange {
                axis: "column",
                index,
                bound: self.cols,
            })
        }
    }

    // Unchecked variants the reduction composes. Callers have already
    // validated the indices.

    pub(crate) fn coeff(&self, row: usize, col: usize) -> f64 {
        self.coefficients[row][col]
    }

    pub(crate) fn swap_unchecked(&mut self, a: usize, b: usize) {
        self.coefficients.swap(a, b);
        self.constants.swap(a, b);
    }

    pub(crate) fn scale_unchecked(&mut self, row: usize, scalar: f64) {
        for value in &mut self.coefficients[row] {
            *value *= scalar;
        }
        self.constants[row] *= scalar;
    }

    pub(crate) fn add_scaled_unchecked(&mut self, source: usize, target: usize, scalar: f64) {
        for col in 0..self.cols {
            let addend = scalar * self.coefficients[source][col];
            self.coefficients[target][col] += addend;
        }
        self.constants[target] += scalar * self.constants[source];
    }
}

impl fmt::Display for AugmentedMatrix {
    /// Boxed rendering: coefficients left of the separator, the constant
    /// right of it, right-aligned on the longest stringified value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .coefficients
            .iter()
            .flatten()
            .chain(self.constants.iter())
            .map(|v| format!("{v}").len())
            .max()
            .unwrap_or(1)
            + 3;

        let inner = self.cols * width;
        let border = format!(
            "|--{}|{}--|",
            " ".repeat(inner - 1),
            " ".repeat(width - 1)
        );

        writeln!(f, "{border}")?;
        for (row, constant) in self.coefficients.iter().zip(self.constants.iter()) {
            write!(f, "|")?;
            for value in row {
                write!(f, "{value:>width$}")?;
            }
            writeln!(f, " |{constant:>width$} |")?;
        }
        writeln!(f, "{border}")
    }
}
