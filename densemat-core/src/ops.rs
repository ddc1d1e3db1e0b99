//! Matrix products.
//!
//! `mult` and `mult_transpose` are two different products with two different
//! shape contracts, each with its own predicate.

use crate::dense_matrix::DenseMatrix;
use crate::error::{MatrixError, Result};
use crate::traits::{Matrix, Scalar};

/// Whether `a * b` is defined, i.e. `a.cols() == b.rows()`.
pub fn mult_valid<A: Matrix, B: Matrix>(a: &A, b: &B) -> bool {
    a.cols() == b.rows()
}

/// Whether `a * transpose(b)` is defined, i.e. `a.cols() == b.cols()`.
pub fn mult_transpose_valid<A: Matrix, B: Matrix>(a: &A, b: &B) -> bool {
    a.cols() == b.cols()
}

/// Standard product: `result[i][j] = sum_k a[i][k] * b[k][j]`.
///
/// # Errors
/// Returns `DimensionMismatch` unless `mult_valid(a, b)`.
pub fn mult<T: Scalar>(a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
    if !mult_valid(a, b) {
        return Err(MatrixError::DimensionMismatch(format!(
            "Cannot multiply {}x{} by {}x{}: left columns ({}) must match right rows ({})",
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols(),
            a.cols(),
            b.rows()
        )));
    }
    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    log::debug!("mult: {}x{} * {}x{}", m, k, k, n);

    let mut result = DenseMatrix::zeros(m, n)?;
    let (lhs, rhs) = (a.data(), b.data());
    for i in 0..m {
        for j in 0..n {
            let mut sum = T::zero();
            for p in 0..k {
                sum = sum + lhs[i * k + p] * rhs[p * n + j];
            }
            result.data[i * n + j] = sum;
        }
    }
    Ok(result)
}

/// Product with the transpose of `b`, without building the transpose:
/// `result[i][j] = sum_k a[i][k] * b[j][k]`.
///
/// # Errors
/// Returns `DimensionMismatch` unless `mult_transpose_valid(a, b)`.
pub fn mult_transpose<T: Scalar>(
    a: &DenseMatrix<T>,
    b: &DenseMatrix<T>,
) -> Result<DenseMatrix<T>> {
    if !mult_transpose_valid(a, b) {
        return Err(MatrixError::DimensionMismatch(format!(
            "Cannot multiply {}x{} by transpose of {}x{}: column counts ({} and {}) must match",
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols(),
            a.cols(),
            b.cols()
        )));
    }
    let (m, k, n) = (a.rows(), a.cols(), b.rows());
    log::debug!("mult_transpose: {}x{} * ({}x{})^T", m, k, n, k);

    let mut result = DenseMatrix::zeros(m, n)?;
    let (lhs, rhs) = (a.data(), b.data());
    for i in 0..m {
        let a_row = &lhs[i * k..(i + 1) * k];
        for j in 0..n {
            let b_row = &rhs[j * k..(j + 1) * k];
            result.data[i * n + j] = a_row
                .iter()
                .zip(b_row)
                .fold(T::zero(), |acc, (&x, &y)| acc + x * y);
        }
    }
    Ok(result)
}

impl<T: Scalar> DenseMatrix<T> {
    /// See [`mult`].
    pub fn mult(&self, rhs: &Self) -> Result<Self> {
        mult(self, rhs)
    }

    /// See [`mult_transpose`].
    pub fn mult_transpose(&self, rhs: &Self) -> Result<Self> {
        mult_transpose(self, rhs)
    }
}
