//! Errors for matrix construction and operations
//!
//! Errors are plain values that propagate through computations; nothing
//! here panics. The interactive harness prints the message and resumes
//! its loop.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for matrix operations
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum MatrixError {
    /// Externally supplied text could not be parsed into the expected
    /// count or type of tokens
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// An operation's shape precondition was violated
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// An index fell outside the valid range
    #[error("index ({row}, {col}) out of bounds for {rows}×{cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl MatrixError {
    pub fn malformed_input(details: impl Into<String>) -> Self {
        MatrixError::MalformedInput(details.into())
    }

    pub fn dimension_mismatch(details: impl Into<String>) -> Self {
        MatrixError::DimensionMismatch(details.into())
    }

    pub fn out_of_bounds(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        MatrixError::OutOfBounds {
            row,
            col,
            rows,
            cols,
        }
    }

    /// Shape mismatch between two operands, e.g. `add: 2×3 vs 3×3`
    pub fn shapes(op: &str, a: (usize, usize), b: (usize, usize)) -> Self {
        Self::dimension_mismatch(format!(
            "{}: {}×{} vs {}×{}",
            op, a.0, a.1, b.0, b.1
        ))
    }

    /// Square-matrix precondition failure, e.g. `determinant: requires square matrix, got 2×3`
    pub fn not_square(op: &str, shape: (usize, usize)) -> Self {
        Self::dimension_mismatch(format!(
            "{}: requires square matrix, got {}×{}",
            op, shape.0, shape.1
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = MatrixError::shapes("add", (2, 3), (3, 3));
        assert_eq!(err.to_string(), "dimension mismatch: add: 2×3 vs 3×3");

        let err = MatrixError::out_of_bounds(4, 0, 3, 3);
        assert_eq!(
            err.to_string(),
            "index (4, 0) out of bounds for 3×3 matrix"
        );

        let err = MatrixError::malformed_input("row 1 has 2 values, expected 3");
        assert_eq!(
            err.to_string(),
            "malformed input: row 1 has 2 values, expected 3"
        );
    }

    #[test]
    fn test_not_square() {
        let err = MatrixError::not_square("inverse", (2, 3));
        assert!(matches!(err, MatrixError::DimensionMismatch(_)));
        assert!(err.to_string().contains("inverse"));
    }
}
