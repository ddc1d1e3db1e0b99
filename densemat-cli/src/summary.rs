use densemat_core::{DenseMatrix, Matrix, Scalar};
use serde::Serialize;

/// JSON summary printed by `densemat info`.
///
/// `sparse_rows` holds 1-based row indices, the same numbering used by the
/// text format and by row-index files.
#[derive(Debug, Serialize)]
pub struct MatrixSummary {
    pub rows: usize,
    pub cols: usize,
    pub nnz: usize,
    pub sparse_rows: Vec<usize>,
}

impl MatrixSummary {
    pub fn from_matrix<T: Scalar>(matrix: &DenseMatrix<T>) -> Self {
        MatrixSummary {
            rows: matrix.rows(),
            cols: matrix.cols(),
            nnz: matrix.nnz(),
            sparse_rows: matrix
                .sparse_rows()
                .indices()
                .iter()
                .map(|row| row + 1)
                .collect(),
        }
    }
}
