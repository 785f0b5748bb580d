//! Dense numeric matrices with elementary linear algebra.
//!
//! Provides the [`Matrix`] type and the operations layered on it:
//! - Construction (zeros, identity, from rows, from textual lines)
//! - Access (get, set, row, col)
//! - Elementwise operations (add, scale)
//! - Matrix multiplication
//! - Transposition across the main/side diagonals and the
//!   vertical/horizontal axes
//! - Determinant by cofactor (Laplace) expansion
//! - Inverse by the adjugate method
//!
//! Operations never mutate their operands; each one returns a freshly
//! allocated matrix. All values are finite `f64`.

mod det;
mod ops;
mod types;

pub use matproc_core::MatrixError;
pub use types::{Matrix, TransposeKind};
