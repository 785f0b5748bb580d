//! The matrix type: storage, construction, element access, rendering

use std::fmt;

use matproc_core::input::parse_row;
use matproc_core::MatrixError;
use serde::{Deserialize, Serialize};

/// A dense 2-D matrix of `f64` values (row-major storage).
///
/// Dimensions are fixed at construction; element `(r, c)` lives at
/// `data[r * cols + c]`. Every operation returns a new matrix rather
/// than mutating an operand; `set` exists only for initial population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

/// Which axis a transposition reflects across
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransposeKind {
    /// Reflect across the main diagonal
    Main,
    /// Reflect across the side (anti-) diagonal
    Side,
    /// Flip across the vertical center line
    Vertical,
    /// Flip across the horizontal center line
    Horizontal,
}

impl TransposeKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "main" => Some(TransposeKind::Main),
            "side" => Some(TransposeKind::Side),
            "vertical" => Some(TransposeKind::Vertical),
            "horizontal" => Some(TransposeKind::Horizontal),
            _ => None,
        }
    }
}

impl Matrix {
    /// Create a zero-filled matrix.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::dimension_mismatch(format!(
                "matrix dimensions must be positive, got {}×{}",
                rows, cols
            )));
        }
        Ok(Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        })
    }

    /// Create an n×n identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Create a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the rows are empty or ragged.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut m = Self::zeros(n_rows, n_cols)?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(MatrixError::dimension_mismatch(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    n_cols
                )));
            }
            m.data[i * n_cols..(i + 1) * n_cols].copy_from_slice(row);
        }
        Ok(m)
    }

    /// Build a matrix from textual rows of whitespace-separated values.
    ///
    /// Each line must supply at least `cols` tokens; extra trailing
    /// tokens are ignored.
    ///
    /// # Errors
    ///
    /// Returns `MalformedInput` if a line is missing, short, or holds a
    /// token that does not parse to a finite number.
    pub fn from_lines<'a, I>(rows: usize, cols: usize, lines: I) -> Result<Self, MatrixError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut m = Self::zeros(rows, cols)?;
        let mut lines = lines.into_iter();
        for r in 0..rows {
            let line = lines.next().ok_or_else(|| {
                MatrixError::malformed_input(format!("expected {} rows, got {}", rows, r))
            })?;
            let values = parse_row(line, cols)
                .map_err(|e| MatrixError::malformed_input(format!("row {}: {}", r, e)))?;
            m.data[r * cols..(r + 1) * cols].copy_from_slice(&values);
        }
        Ok(m)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as (rows, cols).
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Get the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either index is outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        self.check_bounds(row, col)?;
        Ok(self.data[row * self.cols + col])
    }

    /// Overwrite the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either index is outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        self.check_bounds(row, col)?;
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Extract a row as a vector.
    pub fn row(&self, row: usize) -> Result<Vec<f64>, MatrixError> {
        self.check_bounds(row, 0)?;
        let start = row * self.cols;
        Ok(self.data[start..start + self.cols].to_vec())
    }

    /// Extract a column as a vector.
    pub fn col(&self, col: usize) -> Result<Vec<f64>, MatrixError> {
        self.check_bounds(0, col)?;
        Ok((0..self.rows)
            .map(|r| self.data[r * self.cols + col])
            .collect())
    }

    /// Underlying row-major data.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::out_of_bounds(row, col, self.rows, self.cols));
        }
        Ok(())
    }

    // Unchecked access for operation internals that already validated shape.
    pub(crate) fn at(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub(crate) fn put(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }
}

impl fmt::Display for Matrix {
    /// Renders `rows` lines of space-separated values, no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.data[r * self.cols + c])?;
            }
        }
        Ok(())
    }
}
