//! Core types for the matrix processor.
//!
//! - [`MatrixError`]: the error value every fallible operation returns
//! - [`input`]: parsing of externally supplied textual data (sizes,
//!   scalars, matrix rows)

mod error;
pub mod input;

pub use error::MatrixError;
