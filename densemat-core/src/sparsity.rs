//! Detection, removal and reinsertion of all-zero ("sparse") rows.
//!
//! A row is sparse when every element compares equal to zero exactly. Rows of
//! a matrix with no columns are vacuously sparse.

use crate::dense_matrix::DenseMatrix;
use crate::error::{MatrixError, Result};
use crate::traits::Scalar;
use serde::Serialize;

/// Sorted indices of the all-zero rows of a matrix, together with the row
/// count of the matrix they were taken from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SparseRows {
    indices: Vec<usize>,
    total_rows: usize,
}

impl SparseRows {
    /// Builds a row set for a matrix with `total_rows` rows.
    ///
    /// # Errors
    /// Returns `InconsistentRowSet` if the indices are not strictly increasing
    /// or any index is `>= total_rows`.
    pub fn new(indices: Vec<usize>, total_rows: usize) -> Result<Self> {
        validate_indices(&indices, total_rows)?;
        Ok(Self {
            indices,
            total_rows,
        })
    }

    /// The 0-based row indices, ascending.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, row: usize) -> bool {
        self.indices.binary_search(&row).is_ok()
    }

    /// Row count of the matrix the set describes.
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }
}

fn validate_indices(indices: &[usize], total_rows: usize) -> Result<()> {
    for pair in indices.windows(2) {
        if pair[0] >= pair[1] {
            return Err(MatrixError::InconsistentRowSet(format!(
                "Row indices must be strictly increasing, found {} followed by {}",
                pair[0], pair[1]
            )));
        }
    }
    if let Some(&last) = indices.last() {
        if last >= total_rows {
            return Err(MatrixError::InconsistentRowSet(format!(
                "Row index {} out of range for {} rows",
                last, total_rows
            )));
        }
    }
    Ok(())
}

impl<T: Scalar> DenseMatrix<T> {
    fn is_zero_row(&self, row: usize) -> bool {
        self.data[row * self.cols..(row + 1) * self.cols]
            .iter()
            .all(|v| *v == T::zero())
    }

    /// Scans the matrix once and collects every all-zero row.
    pub fn sparse_rows(&self) -> SparseRows {
        let indices: Vec<usize> = (0..self.rows).filter(|&i| self.is_zero_row(i)).collect();
        log::trace!(
            "Found {} sparse rows in {}x{} matrix",
            indices.len(),
            self.rows,
            self.cols
        );
        SparseRows {
            indices,
            total_rows: self.rows,
        }
    }

    /// 0-based indices of the all-zero rows, ascending.
    pub fn sparse_row_indices(&self) -> Vec<usize> {
        self.sparse_rows().into_indices()
    }

    /// Number of all-zero rows.
    pub fn count_sparse_rows(&self) -> usize {
        self.sparse_rows().len()
    }

    /// Returns a new matrix holding only the non-sparse rows, in order.
    pub fn compact(&self) -> Result<Self> {
        self.compact_with_rows().map(|(compacted, _)| compacted)
    }

    /// Like [`compact`](Self::compact), also returning the rows that were
    /// removed so the result can later be passed to [`expand_rows`](Self::expand_rows).
    pub fn compact_with_rows(&self) -> Result<(Self, SparseRows)> {
        let removed = self.sparse_rows();
        let mut result = Self::zeros(self.rows - removed.len(), self.cols)?;
        log::debug!(
            "Compacting {}x{} matrix to {}x{}",
            self.rows,
            self.cols,
            result.rows,
            result.cols
        );

        let cols = self.cols;
        let mut skip = removed.indices().iter().peekable();
        let mut target = 0;
        for i in 0..self.rows {
            if skip.peek() == Some(&&i) {
                skip.next();
                continue;
            }
            result.data[target * cols..(target + 1) * cols]
                .copy_from_slice(&self.data[i * cols..(i + 1) * cols]);
            target += 1;
        }
        Ok((result, removed))
    }

    /// Reinserts zero rows into a compacted matrix.
    ///
    /// The first `num_sparse_rows` entries of `sparse_row_indices` name the
    /// rows of the result that are zero; the remaining rows are filled from
    /// `self` in order. The result has `self.rows() + num_sparse_rows` rows.
    ///
    /// # Errors
    /// Returns `InconsistentRowSet` if fewer than `num_sparse_rows` indices are
    /// given, or if they are unsorted, duplicated or out of range for the result.
    pub fn expand(&self, num_sparse_rows: usize, sparse_row_indices: &[usize]) -> Result<Self> {
        let indices = sparse_row_indices.get(..num_sparse_rows).ok_or_else(|| {
            MatrixError::InconsistentRowSet(format!(
                "Expected {} row indices, got {}",
                num_sparse_rows,
                sparse_row_indices.len()
            ))
        })?;
        let total_rows = self
            .rows
            .checked_add(num_sparse_rows)
            .ok_or(MatrixError::AllocationError {
                rows: usize::MAX,
                cols: self.cols,
            })?;
        validate_indices(indices, total_rows)?;

        let mut result = Self::zeros(total_rows, self.cols)?;
        log::debug!(
            "Expanding {}x{} matrix to {}x{}",
            self.rows,
            self.cols,
            result.rows,
            result.cols
        );

        let cols = self.cols;
        let mut zero_rows = indices.iter().peekable();
        let mut source = 0;
        for i in 0..total_rows {
            if zero_rows.peek() == Some(&&i) {
                zero_rows.next();
                continue;
            }
            result.data[i * cols..(i + 1) * cols]
                .copy_from_slice(&self.data[source * cols..(source + 1) * cols]);
            source += 1;
        }
        Ok(result)
    }

    /// [`expand`](Self::expand) driven by a row set from
    /// [`compact_with_rows`](Self::compact_with_rows).
    pub fn expand_rows(&self, rows: &SparseRows) -> Result<Self> {
        let expanded = self.rows.checked_add(rows.len()).ok_or_else(|| {
            MatrixError::InconsistentRowSet(format!(
                "Expanding {} rows by {} overflows the row count",
                self.rows,
                rows.len()
            ))
        })?;
        if rows.total_rows() != expanded {
            return Err(MatrixError::InconsistentRowSet(format!(
                "Row set describes {} rows but expanding {} rows by {} gives {}",
                rows.total_rows(),
                self.rows,
                rows.len(),
                expanded
            )));
        }
        self.expand(rows.len(), rows.indices())
    }
}

#[cfg(test)]
mod tests {
    use super::SparseRows;
    use crate::{DenseMatrix, Matrix, MatrixError};

    fn sample() -> DenseMatrix<f64> {
        DenseMatrix::from_rows(&[
            vec![0.0, 0.0],
            vec![1.0, 2.0],
            vec![0.0, 0.0],
            vec![3.0, 4.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_sparse_row_detection() {
        let a = sample();
        assert_eq!(a.sparse_row_indices(), vec![0, 2]);
        assert_eq!(a.count_sparse_rows(), 2);
        let rows = a.sparse_rows();
        assert_eq!(rows.total_rows(), 4);
        assert!(rows.contains(2));
        assert!(!rows.contains(1));
    }

    #[test]
    fn test_exact_zero_comparison() -> Result<(), MatrixError> {
        let a = DenseMatrix::from_rows(&[
            vec![-0.0, 0.0],
            vec![1e-300, 0.0],
            vec![f64::NAN, 0.0],
        ])?;
        assert_eq!(a.sparse_row_indices(), vec![0]);
        Ok(())
    }

    #[test]
    fn test_compact() -> Result<(), MatrixError> {
        let a = sample();
        let c = a.compact()?;
        assert_eq!(c, DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]])?);
        assert_eq!(c.rows(), a.rows() - a.count_sparse_rows());
        Ok(())
    }

    #[test]
    fn test_compact_then_expand_round_trip() -> Result<(), MatrixError> {
        let a = sample();
        let (c, removed) = a.compact_with_rows()?;
        assert_eq!(c.expand(2, &[0, 2])?, a);
        assert_eq!(c.expand_rows(&removed)?, a);
        Ok(())
    }

    #[test]
    fn test_compact_all_zero_and_no_zero() -> Result<(), MatrixError> {
        let zeros: DenseMatrix<f64> = DenseMatrix::zeros(3, 2)?;
        let (c, removed) = zeros.compact_with_rows()?;
        assert_eq!(c.dims(), (0, 2));
        assert_eq!(removed.indices(), &[0, 1, 2]);
        assert_eq!(c.expand_rows(&removed)?, zeros);

        let dense = DenseMatrix::from_rows(&[vec![1.0], vec![2.0]])?;
        assert_eq!(dense.count_sparse_rows(), 0);
        assert_eq!(dense.compact()?, dense);
        Ok(())
    }

    #[test]
    fn test_zero_column_rows_are_sparse() -> Result<(), MatrixError> {
        let a: DenseMatrix<f64> = DenseMatrix::zeros(3, 0)?;
        assert_eq!(a.count_sparse_rows(), 3);
        assert_eq!(a.compact()?.dims(), (0, 0));
        Ok(())
    }

    #[test]
    fn test_expand_uses_only_counted_prefix() -> Result<(), MatrixError> {
        let c = DenseMatrix::from_rows(&[vec![7.0]])?;
        let e = c.expand(1, &[1, 99, 99])?;
        assert_eq!(e, DenseMatrix::from_rows(&[vec![7.0], vec![0.0]])?);
        Ok(())
    }

    #[test]
    fn test_expand_rejects_bad_row_sets() -> Result<(), MatrixError> {
        let c = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]])?;
        for (count, indices) in [
            (2usize, vec![2usize, 0]), // unsorted
            (2, vec![1, 1]), // duplicate
            (2, vec![0, 4]), // past the 4 result rows
            (3, vec![0, 1]), // fewer indices than claimed
        ] {
            match c.expand(count, &indices) {
                Err(MatrixError::InconsistentRowSet(_)) => {}
                other => panic!("Expected InconsistentRowSet for {:?}, got {:?}", indices, other),
            }
        }
        Ok(())
    }

    #[test]
    fn test_expand_rows_checks_total() -> Result<(), MatrixError> {
        let c = DenseMatrix::from_rows(&[vec![1.0]])?;
        let rows = SparseRows::new(vec![0], 5)?;
        assert!(matches!(
            c.expand_rows(&rows),
            Err(MatrixError::InconsistentRowSet(_))
        ));
        Ok(())
    }

    #[test]
    fn test_expand_rows_row_count_overflow() -> Result<(), MatrixError> {
        let c: DenseMatrix<f64> = DenseMatrix::zeros(usize::MAX, 0)?;
        let rows = SparseRows::new(vec![0], usize::MAX)?;
        match c.expand_rows(&rows) {
            Err(MatrixError::InconsistentRowSet(msg)) => assert!(msg.contains("overflows")),
            other => panic!("Expected InconsistentRowSet, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_sparse_rows_new_validates() {
        assert!(SparseRows::new(vec![0, 3], 4).is_ok());
        assert!(matches!(
            SparseRows::new(vec![3, 0], 4),
            Err(MatrixError::InconsistentRowSet(_))
        ));
        assert!(matches!(
            SparseRows::new(vec![4], 4),
            Err(MatrixError::InconsistentRowSet(_))
        ));
    }
}
