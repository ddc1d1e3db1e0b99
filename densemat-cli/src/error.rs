use densemat_core::MatrixError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Matrix error: {0}")]
    Matrix(#[from] MatrixError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Line {line}: expected a 1-based row index, found '{token}'")]
    InvalidRowIndex { line: usize, token: String },
}
