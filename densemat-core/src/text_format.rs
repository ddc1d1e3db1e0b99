//! Coordinate text format.
//!
//! ```text
//! <rows> <cols>
//! <row> <col> <value>
//! ...
//! ```
//!
//! Row and column indices are 1-based in the text and 0-based in memory.
//! Only non-zero cells are written; blank lines are ignored when reading.

use crate::dense_matrix::DenseMatrix;
use crate::error::{MatrixError, Result};
use crate::traits::Scalar;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// A single non-zero cell, with 0-based coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Triplet<T> {
    row: usize,
    col: usize,
    value: T,
}

impl<T: Copy> Triplet<T> {
    pub fn new(row: usize, col: usize, value: T) -> Self {
        Triplet { row, col, value }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn value(&self) -> T {
        self.value
    }
}

/// Row-major iterator over the non-zero cells of a [`DenseMatrix`].
pub struct TripletIter<'a, T: Scalar> {
    matrix: &'a DenseMatrix<T>,
    pos: usize,
}

impl<T: Scalar> Iterator for TripletIter<'_, T> {
    type Item = Triplet<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.matrix.data.len() {
            let idx = self.pos;
            self.pos += 1;
            let value = self.matrix.data[idx];
            if value != T::zero() {
                return Some(Triplet {
                    row: idx / self.matrix.cols,
                    col: idx % self.matrix.cols,
                    value,
                });
            }
        }
        None
    }
}

fn invalid(line: usize, reason: impl Into<String>) -> MatrixError {
    MatrixError::InvalidEntry {
        line,
        reason: reason.into(),
    }
}

fn parse_token<V: FromStr>(token: &str, what: &str, line: usize) -> Result<V> {
    token
        .parse()
        .map_err(|_| invalid(line, format!("invalid {} '{}'", what, token)))
}

/// Reads a matrix in coordinate format.
///
/// Parsing is line-based: the header must be two non-negative integers on one
/// line (`2.0 3.0` is rejected) and each entry must sit on its own line as
/// exactly `row col value`. Several entries on one line are rejected.
///
/// # Errors
/// `InvalidEntry` for a malformed header or entry line, or an entry outside
/// the declared shape; `IoError` if the reader fails.
pub fn load<T: Scalar, R: BufRead>(reader: R) -> Result<DenseMatrix<T>> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(n, line)| (n + 1, line));

    let (header_line, header) = loop {
        match lines.next() {
            Some((n, line)) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break (n, line);
                }
            }
            None => return Err(invalid(1, "missing '<rows> <cols>' header")),
        }
    };
    let fields: Vec<&str> = header.split_whitespace().collect();
    let [rows, cols] = fields[..] else {
        return Err(invalid(
            header_line,
            format!("expected '<rows> <cols>', found {} fields", fields.len()),
        ));
    };
    let rows: usize = parse_token(rows, "row count", header_line)?;
    let cols: usize = parse_token(cols, "column count", header_line)?;

    let mut matrix = DenseMatrix::zeros(rows, cols)?;
    let mut entries = 0usize;
    for (n, line) in lines {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let [row, col, value] = fields[..] else {
            return Err(invalid(
                n,
                format!("expected '<row> <col> <value>', found {} fields", fields.len()),
            ));
        };
        let row: usize = parse_token(row, "row index", n)?;
        let col: usize = parse_token(col, "column index", n)?;
        let value: T = parse_token(value, "value", n)?;
        if row == 0 || row > rows || col == 0 || col > cols {
            return Err(invalid(
                n,
                format!(
                    "cell ({}, {}) outside 1-based range {}x{}",
                    row, col, rows, cols
                ),
            ));
        }
        matrix.set(row - 1, col - 1, value)?;
        entries += 1;
    }

    log::debug!("Loaded {}x{} matrix with {} entries", rows, cols, entries);
    Ok(matrix)
}

/// Writes a matrix in coordinate format, non-zero cells only, row-major.
///
/// Values use `Display`, which prints the shortest text that parses back to
/// the same value.
pub fn dump<T: Scalar, W: Write>(matrix: &DenseMatrix<T>, mut writer: W) -> Result<()> {
    writeln!(writer, "{} {}", matrix.rows, matrix.cols)?;
    for t in matrix.triplets() {
        writeln!(writer, "{} {} {}", t.row + 1, t.col + 1, t.value)?;
    }
    Ok(())
}

impl<T: Scalar> DenseMatrix<T> {
    /// Iterates the non-zero cells in row-major order.
    pub fn triplets(&self) -> TripletIter<'_, T> {
        TripletIter {
            matrix: self,
            pos: 0,
        }
    }

    /// See [`load`].
    pub fn load<R: BufRead>(reader: R) -> Result<Self> {
        load(reader)
    }

    /// See [`dump`].
    pub fn dump<W: Write>(&self, writer: W) -> Result<()> {
        dump(self, writer)
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        log::info!("Reading matrix from {}", path.as_ref().display());
        load(BufReader::new(file))
    }

    pub fn dump_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        dump(self, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
