//! In-place Gauss-Jordan reduction to reduced row-echelon form.
//!
//! The algorithm is a mechanical composition of the row primitives in
//! [`crate::augmented`]: find a pivot, swap it into place, normalize,
//! eliminate the pivot column everywhere else. It never judges the system:
//! a row with no pivot is skipped silently, and reading rank or
//! inconsistency out of the reduced matrix is the caller's business.

use crate::augmented::AugmentedMatrix;

impl AugmentedMatrix {
    /// Reduce the matrix in place to reduced row-echelon form.
    pub fn reduce(&mut self) {
        self.reduce_with(|_, _| {});
    }

    /// Reduce in place, invoking `on_step` after each row pass — whether
    /// the row received a pivot or not — with the row index and the current
    /// state of the matrix.
    ///
    /// For each row `r` in order: the first column in `r..cols` holding a
    /// non-zero value at a row index `>= r` becomes the pivot column, and
    /// the first such row is swapped up to `r`. Row `r` is scaled by the
    /// reciprocal of the pivot so the leading entry becomes 1, then every
    /// other row with a non-zero value in the pivot column has a multiple
    /// of row `r` added to zero it out — above and below, so no separate
    /// back-substitution pass is needed. Pivots are chosen first-non-zero,
    /// not largest-magnitude; there is no partial pivoting.
    pub fn reduce_with<F>(&mut self, mut on_step: F)
    where
        F: FnMut(usize, &AugmentedMatrix),
    {
        for row in 0..self.n_rows() {
            if let Some((pivot_row, pivot_col)) = self.find_pivot(row) {
                if pivot_row != row {
                    self.swap_unchecked(row, pivot_row);
                }

                let pivot = self.coeff(row, pivot_col);
                self.scale_unchecked(row, 1.0 / pivot);

                for other in 0..self.n_rows() {
                    if other == row {
                        continue;
                    }
                    let value = self.coeff(other, pivot_col);
                    if value != 0.0 {
                        self.add_scaled_unchecked(row, other, -value);
                    }
                }
            }

            on_step(row, &*self);
        }
    }

    /// First column in `start..cols` with a non-zero value at any row index
    /// `>= start`, paired with the smallest such row index. `None` when the
    /// remaining block is all zeros, in which case row `start` gets no
    /// pivot.
    fn find_pivot(&self, start: usize) -> Option<(usize, usize)> {
        for col in start..self.n_cols() {
            for row in start..self.n_rows() {
                if self.coeff(row, col) != 0.0 {
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// Whether the coefficient block is in reduced row-echelon form:
    /// pivots move strictly right from row to row, every pivot is 1 and
    /// alone in its column, and zero rows sit below all pivot rows.
    ///
    /// Entries within `tol` of 0 (or of 1, for pivots) are accepted, so
    /// float residue from a reduction can be tolerated; pass `0.0` for an
    /// exact check.
    pub fn is_reduced(&self, tol: f64) -> bool {
        let mut last_pivot: Option<usize> = None;

        for row in 0..self.n_rows() {
            let pivot = (0..self.n_cols()).find(|&col| self.coeff(row, col).abs() > tol);

            let Some(col) = pivot else {
                // first zero row; everything below must be zero too
                return (row + 1..self.n_rows())
                    .all(|r| (0..self.n_cols()).all(|c| self.coeff(r, c).abs() <= tol));
            };

            if let Some(prev) = last_pivot {
                if col <= prev {
                    return false;
                }
            }
            if (self.coeff(row, col) - 1.0).abs() > tol {
                return false;
            }
            for r in 0..self.n_rows() {
                if r != row && self.coeff(r, col).abs() > tol {
                    return false;
                }
            }
            last_pivot = Some(col);
        }

        true
    }
}
