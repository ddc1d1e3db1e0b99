use thiserror::Error;

pub type Result<T> = core::result::Result<T, MatrixError>;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("Unable to allocate a {rows}x{cols} matrix")]
    AllocationError { rows: usize, cols: usize },

    #[error("Index ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Invalid entry at line {line}: {reason}")]
    InvalidEntry { line: usize, reason: String },

    #[error("Inconsistent row set: {0}")]
    InconsistentRowSet(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
