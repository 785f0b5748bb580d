//! Determinant by cofactor expansion and inverse by the adjugate

use matproc_core::MatrixError;

use crate::types::{Matrix, TransposeKind};

/// Positional cofactor sign for 1-based (row, col): (-1)^(row+col).
fn cofactor_sign(row: usize, col: usize) -> f64 {
    if (row + col) % 2 == 1 {
        -1.0
    } else {
        1.0
    }
}

impl Matrix {
    /// The minor: this matrix with row `row` and column `col` deleted,
    /// remaining rows and columns keeping their relative order.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `row` or `col` is outside the matrix.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self, MatrixError> {
        if row >= self.rows() || col >= self.cols() {
            return Err(MatrixError::out_of_bounds(
                row,
                col,
                self.rows(),
                self.cols(),
            ));
        }
        let mut res = Matrix::zeros(self.rows() - 1, self.cols() - 1)?;
        let mut dst_r = 0;
        for r in 0..self.rows() {
            if r == row {
                continue;
            }
            let mut dst_c = 0;
            for c in 0..self.cols() {
                if c == col {
                    continue;
                }
                res.put(dst_r, dst_c, self.at(r, c));
                dst_c += 1;
            }
            dst_r += 1;
        }
        Ok(res)
    }

    /// Determinant by Laplace expansion along the first row.
    ///
    /// Recursion depth equals the matrix size and cost is factorial;
    /// acceptable for the small matrices this tool targets.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` for a non-square matrix.
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::not_square("determinant", self.shape()));
        }
        let n = self.rows();
        if n == 1 {
            return Ok(self.at(0, 0));
        }
        if n == 2 {
            return Ok(self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0));
        }
        let mut res = 0.0;
        for c in 0..n {
            let minor_det = self.minor(0, c)?.determinant()?;
            res += cofactor_sign(1, c + 1) * minor_det * self.at(0, c);
        }
        Ok(res)
    }

    /// Inverse by the adjugate method: transpose of the cofactor matrix
    /// scaled by the reciprocal determinant.
    ///
    /// A zero determinant is not treated as an error; the division
    /// produces non-finite entries (infinities/NaN) that propagate into
    /// the result. Callers needing a guard should check `determinant`
    /// first.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` for a non-square matrix.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let d = self.determinant()?;
        let n = self.rows();
        if n == 1 {
            let mut res = Matrix::zeros(1, 1)?;
            res.put(0, 0, 1.0 / d);
            return Ok(res);
        }
        let mut cofactors = Matrix::zeros(n, n)?;
        for r in 0..n {
            for c in 0..n {
                let minor_det = self.minor(r, c)?.determinant()?;
                cofactors.put(r, c, cofactor_sign(r + 1, c + 1) * minor_det);
            }
        }
        Ok(cofactors.transpose(TransposeKind::Main)?.scale(1.0 / d))
    }
}
