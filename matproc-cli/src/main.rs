//! Interactive menu harness for the matrix processor.
//!
//! Reads sizes and rows from stdin, dispatches to `matproc-matrix`, and
//! prints results to stdout. Any `MatrixError` is reported as a single
//! line and the menu loop resumes; the loop only ends on choice 0 or
//! end of input. Diagnostics go to stderr via `tracing`, controlled by
//! `RUST_LOG`.

use std::io::{self, BufRead, Write};

use matproc_core::{input, MatrixError};
use matproc_matrix::{Matrix, TransposeKind};
use tracing::debug;

const MENU: &str = "1. Add matrices
2. Multiply matrix by a constant
3. Multiply matrices
4. Transpose matrix
5. Calculate a determinant
6. Inverse matrix
0. Exit";

const TRANSPOSE_MENU: &str = "1. Main diagonal
2. Side diagonal
3. Vertical line
4. Horizontal line";

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.run()
}

/// Why an action stopped early
enum ActionError {
    /// The operation or input parsing failed; report and resume
    Matrix(MatrixError),
    /// The underlying stream failed; abort the program
    Io(io::Error),
    /// Input ended mid-action; leave the loop
    Eof,
}

impl From<MatrixError> for ActionError {
    fn from(e: MatrixError) -> Self {
        ActionError::Matrix(e)
    }
}

impl From<io::Error> for ActionError {
    fn from(e: io::Error) -> Self {
        ActionError::Io(e)
    }
}

struct Session<R, W> {
    lines: io::Lines<R>,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn new(input: R, out: W) -> Self {
        Self {
            lines: input.lines(),
            out,
        }
    }

    fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.out, "{}", MENU)?;
            writeln!(self.out, "Your choice:")?;
            let line = match self.lines.next() {
                Some(line) => line?,
                None => break,
            };
            let choice = match input::parse_choice(&line, 6) {
                Ok(c) => c,
                Err(e) => {
                    writeln!(self.out, "{}", e)?;
                    continue;
                }
            };
            debug!(choice, "menu selection");
            if choice == 0 {
                break;
            }
            match self.dispatch(choice) {
                Ok(()) => {}
                Err(ActionError::Matrix(e)) => writeln!(self.out, "{}", e)?,
                Err(ActionError::Io(e)) => return Err(e),
                Err(ActionError::Eof) => break,
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: usize) -> Result<(), ActionError> {
        match choice {
            1 => self.add_action(),
            2 => self.scale_action(),
            3 => self.multiply_action(),
            4 => self.transpose_action(),
            5 => self.determinant_action(),
            6 => self.inverse_action(),
            _ => unreachable!("parse_choice bounds the selection"),
        }
    }

    fn next_line(&mut self) -> Result<String, ActionError> {
        match self.lines.next() {
            Some(line) => Ok(line?),
            None => Err(ActionError::Eof),
        }
    }

    /// Read a size line plus that many rows, e.g. with `label` " first":
    /// `Enter size of first matrix:` then `Enter first matrix:`.
    fn read_matrix(&mut self, label: &str) -> Result<Matrix, ActionError> {
        writeln!(self.out, "Enter size of{} matrix:", label)?;
        let (rows, cols) = input::parse_size(&self.next_line()?)?;
        writeln!(self.out, "Enter{} matrix:", label)?;
        let mut lines = Vec::with_capacity(rows);
        for _ in 0..rows {
            lines.push(self.next_line()?);
        }
        let m = Matrix::from_lines(rows, cols, lines.iter().map(String::as_str))?;
        debug!(rows, cols, "matrix read");
        Ok(m)
    }

    fn print_matrix(&mut self, m: &Matrix) -> Result<(), ActionError> {
        writeln!(self.out, "The result is:")?;
        writeln!(self.out, "{}", m)?;
        Ok(())
    }

    fn add_action(&mut self) -> Result<(), ActionError> {
        let a = self.read_matrix(" first")?;
        let b = self.read_matrix(" second")?;
        let res = a.add(&b)?;
        self.print_matrix(&res)
    }

    fn scale_action(&mut self) -> Result<(), ActionError> {
        let m = self.read_matrix("")?;
        writeln!(self.out, "Enter constant:")?;
        let k = input::parse_scalar(&self.next_line()?)?;
        self.print_matrix(&m.scale(k))
    }

    fn multiply_action(&mut self) -> Result<(), ActionError> {
        let a = self.read_matrix(" first")?;
        let b = self.read_matrix(" second")?;
        let res = a.matmul(&b)?;
        self.print_matrix(&res)
    }

    fn transpose_action(&mut self) -> Result<(), ActionError> {
        writeln!(self.out, "{}", TRANSPOSE_MENU)?;
        writeln!(self.out, "Your choice:")?;
        let choice = input::parse_choice(&self.next_line()?, 4)?;
        let kind = match choice {
            1 => TransposeKind::Main,
            2 => TransposeKind::Side,
            3 => TransposeKind::Vertical,
            4 => TransposeKind::Horizontal,
            _ => {
                return Err(MatrixError::malformed_input(format!(
                    "transposition choice {} out of range 1-4",
                    choice
                ))
                .into())
            }
        };
        let m = self.read_matrix("")?;
        self.print_matrix(&m.transpose(kind)?)
    }

    fn determinant_action(&mut self) -> Result<(), ActionError> {
        let m = self.read_matrix("")?;
        let det = m.determinant()?;
        writeln!(self.out, "The result is:")?;
        writeln!(self.out, "{}", det)?;
        Ok(())
    }

    fn inverse_action(&mut self) -> Result<(), ActionError> {
        let m = self.read_matrix("")?;
        self.print_matrix(&m.inverse()?)
    }
}
