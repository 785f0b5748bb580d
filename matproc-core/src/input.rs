//! Parsing of externally supplied textual data.
//!
//! The interactive harness hands whole lines to these functions; they
//! turn whitespace-separated tokens into numbers and reject anything
//! that would violate the finiteness invariant on stored elements.

use crate::MatrixError;

/// Parse a matrix size line: two positive integers, extra tokens ignored.
pub fn parse_size(line: &str) -> Result<(usize, usize), MatrixError> {
    let mut tokens = line.split_whitespace();
    let rows = parse_dim(tokens.next(), "rows")?;
    let cols = parse_dim(tokens.next(), "cols")?;
    Ok((rows, cols))
}

fn parse_dim(token: Option<&str>, name: &str) -> Result<usize, MatrixError> {
    let token = token
        .ok_or_else(|| MatrixError::malformed_input(format!("size line is missing {}", name)))?;
    let value: usize = token
        .parse()
        .map_err(|_| MatrixError::malformed_input(format!("{}: not an integer: {:?}", name, token)))?;
    if value == 0 {
        return Err(MatrixError::malformed_input(format!(
            "{} must be positive",
            name
        )));
    }
    Ok(value)
}

/// Parse a single finite floating-point token.
pub fn parse_scalar(line: &str) -> Result<f64, MatrixError> {
    let token = line
        .split_whitespace()
        .next()
        .ok_or_else(|| MatrixError::malformed_input("expected a number, got empty line"))?;
    parse_value(token)
}

/// Parse one matrix row: at least `cols` finite float tokens.
///
/// Extra trailing tokens are ignored; a shorter line is malformed.
pub fn parse_row(line: &str, cols: usize) -> Result<Vec<f64>, MatrixError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < cols {
        return Err(MatrixError::malformed_input(format!(
            "row has {} values, expected {}",
            tokens.len(),
            cols
        )));
    }
    tokens[..cols].iter().map(|t| parse_value(t)).collect()
}

/// Parse a menu selection in `0..=max`.
pub fn parse_choice(line: &str, max: usize) -> Result<usize, MatrixError> {
    let token = line.trim();
    let choice: usize = token
        .parse()
        .map_err(|_| MatrixError::malformed_input(format!("not a menu choice: {:?}", token)))?;
    if choice > max {
        return Err(MatrixError::malformed_input(format!(
            "choice {} out of range 0-{}",
            choice, max
        )));
    }
    Ok(choice)
}

fn parse_value(token: &str) -> Result<f64, MatrixError> {
    let value: f64 = token
        .parse()
        .map_err(|_| MatrixError::malformed_input(format!("not a number: {:?}", token)))?;
    if !value.is_finite() {
        return Err(MatrixError::malformed_input(format!(
            "not a finite number: {:?}",
            token
        )));
    }
    Ok(value)
}
