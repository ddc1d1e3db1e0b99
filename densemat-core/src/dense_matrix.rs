use crate::error::{MatrixError, Result};
use crate::traits::{Matrix, Scalar};
use serde::Serialize;
use std::fmt;

/// Represents a dense matrix stored in row-major order on the CPU.
///
/// Storage always holds exactly `rows * cols` initialised elements. Structural
/// operations (transpose, multiply, compaction) allocate a new matrix and leave
/// `self` untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DenseMatrix<T: Scalar> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<T>, // data[row * cols + col]
}

impl<T: Scalar> DenseMatrix<T> {
    /// Creates a new DenseMatrix filled with zeros.
    ///
    /// # Errors
    /// Returns `AllocationError` if `rows * cols` overflows or the buffer cannot
    /// be reserved.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = rows
            .checked_mul(cols)
            .ok_or(MatrixError::AllocationError { rows, cols })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatrixError::AllocationError { rows, cols })?;
        data.resize(len, T::zero());
        Ok(Self { rows, cols, data })
    }

    /// Creates a new DenseMatrix from raw data, dimensions, assuming row-major order.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(MatrixError::AllocationError { rows, cols })?;
        if data.len() != expected {
            return Err(MatrixError::DimensionMismatch(format!(
                "Data length ({}) does not match dimensions ({}x{})",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a DenseMatrix from a nested row representation.
    /// The column count is taken from the first row; every other row must match it.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.len());
        let mut matrix = Self::zeros(rows.len(), cols)?;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::DimensionMismatch(format!(
                    "Row {} has {} columns, expected {}",
                    r,
                    row.len(),
                    cols
                )));
            }
            matrix.data[r * cols..(r + 1) * cols].copy_from_slice(row);
        }
        Ok(matrix)
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Gets the element at the specified row and column.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let idx = self.offset(row, col)?;
        Ok(self.data[idx])
    }

    /// Writes `value` at the specified row and column.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let idx = self.offset(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Returns row `row` as a slice.
    pub fn row(&self, row: usize) -> Result<&[T]> {
        if row >= self.rows {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(&self.data[row * self.cols..(row + 1) * self.cols])
    }

    /// Returns a slice view of the underlying row-major data.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Number of elements that are not exactly zero.
    pub fn nnz(&self) -> usize {
        self.data.iter().filter(|v| **v != T::zero()).count()
    }

    /// Returns a new matrix `b` with `b[j][i] == self[i][j]`.
    pub fn transpose(&self) -> Result<Self> {
        log::debug!("Transposing {}x{} matrix", self.rows, self.cols);
        let mut result = Self::zeros(self.cols, self.rows)?;
        for i in 0..self.rows {
            for j in 0..self.cols {
                result.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Ok(result)
    }
}

impl<T: Scalar> Matrix for DenseMatrix<T> {
    type Value = T;

    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    // rows(), cols(), is_square() are provided by default impls in the trait
}

/// Human-readable grid dump including zeros. Not meant to be parsed back.
impl<T: Scalar> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{:.6} ", self.data[i * self.cols + j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
