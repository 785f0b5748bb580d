//! Elementwise and structural operations: add, scale, matmul, transpose

use matproc_core::MatrixError;

use crate::types::{Matrix, TransposeKind};

/// Dot product of two equal-length vectors.
///
/// Length mismatch is a programming error here: `matmul` guarantees
/// conformant shapes before extracting rows and columns.
fn dot(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "dot product of unequal-length vectors");
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

impl Matrix {
    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` unless both shapes are equal.
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.rows() != other.rows() || self.cols() != other.cols() {
            return Err(MatrixError::shapes("add", self.shape(), other.shape()));
        }
        let mut res = Matrix::zeros(self.rows(), self.cols())?;
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                res.put(r, c, self.at(r, c) + other.at(r, c));
            }
        }
        Ok(res)
    }

    /// Multiply every element by a scalar.
    pub fn scale(&self, k: f64) -> Self {
        let mut res = self.clone();
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                res.put(r, c, self.at(r, c) * k);
            }
        }
        res
    }

    /// Matrix product. Entry (i, j) is the dot product of row i of
    /// `self` with column j of `other`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` unless `self.cols() == other.rows()`.
    pub fn matmul(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.cols() != other.rows() {
            return Err(MatrixError::shapes("matmul", self.shape(), other.shape()));
        }
        let mut res = Matrix::zeros(self.rows(), other.cols())?;
        for r in 0..res.rows() {
            let row = self.row(r)?;
            for c in 0..res.cols() {
                let col = other.col(c)?;
                res.put(r, c, dot(&row, &col));
            }
        }
        Ok(res)
    }

    /// Transpose across the chosen diagonal or axis.
    ///
    /// All four kinds require a square matrix, including the vertical
    /// and horizontal flips.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` for a non-square matrix.
    pub fn transpose(&self, kind: TransposeKind) -> Result<Self, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::not_square("transpose", self.shape()));
        }
        let n = self.rows();
        let mut res = Matrix::zeros(n, n)?;
        for r in 0..n {
            for c in 0..n {
                let value = match kind {
                    TransposeKind::Main => self.at(c, r),
                    TransposeKind::Side => self.at(n - 1 - c, n - 1 - r),
                    TransposeKind::Vertical => self.at(r, n - 1 - c),
                    TransposeKind::Horizontal => self.at(n - 1 - r, c),
                };
                res.put(r, c, value);
            }
        }
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &Matrix, b: &Matrix, tol: f64) -> bool {
        a.shape() == b.shape()
            && a.as_slice()
                .iter()
                .zip(b.as_slice())
                .all(|(x, y)| (x - y).abs() < tol)
    }

    #[test]
    fn test_add() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        let sum = a.add(&b).unwrap();
        let expected = Matrix::from_rows(vec![vec![6.0, 8.0], vec![10.0, 12.0]]).unwrap();
        assert_eq!(sum, expected);
    }

    #[test]
    fn test_add_commutes() {
        let a = Matrix::from_rows(vec![vec![1.5, -2.0, 3.0], vec![0.0, 4.0, -1.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![2.0, 2.0, 2.0], vec![-1.0, 0.5, 9.0]]).unwrap();
        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }

    #[test]
    fn test_add_shape_mismatch() {
        let a = Matrix::zeros(2, 3).unwrap();
        // Rows differ only, cols differ only, both differ: all must fail
        for shape in [(3, 3), (2, 2), (4, 5)] {
            let b = Matrix::zeros(shape.0, shape.1).unwrap();
            assert!(matches!(
                a.add(&b),
                Err(MatrixError::DimensionMismatch(_))
            ));
        }
    }

    #[test]
    fn test_scale() {
        let a = Matrix::from_rows(vec![vec![1.0, -2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(a.scale(1.0), a);
        assert!(a.scale(0.0).as_slice().iter().all(|&x| x == 0.0));
        assert_eq!(
            a.scale(2.0),
            Matrix::from_rows(vec![vec![2.0, -4.0], vec![6.0, 8.0]]).unwrap()
        );
    }

    #[test]
    fn test_matmul() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        let prod = a.matmul(&b).unwrap();
        let expected = Matrix::from_rows(vec![vec![19.0, 22.0], vec![43.0, 50.0]]).unwrap();
        assert_eq!(prod, expected);
    }

    #[test]
    fn test_matmul_rectangular() {
        // 2x3 * 3x2 = 2x2
        let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::from_rows(vec![
            vec![7.0, 8.0],
            vec![9.0, 10.0],
            vec![11.0, 12.0],
        ])
        .unwrap();
        let prod = a.matmul(&b).unwrap();
        assert_eq!(prod.shape(), (2, 2));
        assert_eq!(prod.get(0, 0).unwrap(), 58.0);
        assert_eq!(prod.get(1, 1).unwrap(), 154.0);
    }

    #[test]
    fn test_matmul_associates() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![0.5, -1.0], vec![2.0, 3.0]]).unwrap();
        let c = Matrix::from_rows(vec![vec![7.0, 1.0], vec![-2.0, 4.0]]).unwrap();
        let left = a.matmul(&b).unwrap().matmul(&c).unwrap();
        let right = a.matmul(&b.matmul(&c).unwrap()).unwrap();
        assert!(approx_eq(&left, &right, 1e-9));
    }

    #[test]
    fn test_matmul_inner_dim_mismatch() {
        let a = Matrix::zeros(2, 3).unwrap();
        let b = Matrix::zeros(2, 2).unwrap();
        assert!(matches!(
            a.matmul(&b),
            Err(MatrixError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_transpose_kinds() {
        let m = Matrix::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
        .unwrap();

        let main = m.transpose(TransposeKind::Main).unwrap();
        assert_eq!(main.row(0).unwrap(), vec![1.0, 4.0, 7.0]);

        let side = m.transpose(TransposeKind::Side).unwrap();
        assert_eq!(side.row(0).unwrap(), vec![9.0, 6.0, 3.0]);

        let vertical = m.transpose(TransposeKind::Vertical).unwrap();
        assert_eq!(vertical.row(0).unwrap(), vec![3.0, 2.0, 1.0]);

        let horizontal = m.transpose(TransposeKind::Horizontal).unwrap();
        assert_eq!(horizontal.row(0).unwrap(), vec![7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_transpose_main_roundtrip() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let back = m
            .transpose(TransposeKind::Main)
            .unwrap()
            .transpose(TransposeKind::Main)
            .unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_transpose_rejects_non_square() {
        let m = Matrix::zeros(2, 3).unwrap();
        for kind in [
            TransposeKind::Main,
            TransposeKind::Side,
            TransposeKind::Vertical,
            TransposeKind::Horizontal,
        ] {
            assert!(matches!(
                m.transpose(kind),
                Err(MatrixError::DimensionMismatch(_))
            ));
        }
    }
}
