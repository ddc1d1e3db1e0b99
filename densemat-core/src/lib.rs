//! # Dense Matrix Engine
//!
//! Row-major dense matrices with bounds-checked access, transpose, two
//! product forms, zero-row compaction and a 1-based coordinate text format.

pub mod dense_matrix;
pub mod error;
pub mod ops;
pub mod sparsity;
pub mod text_format;
pub mod traits;
pub mod util;

// Re-export public types
pub use dense_matrix::DenseMatrix;
pub use error::{MatrixError, Result};
pub use ops::{mult, mult_transpose, mult_transpose_valid, mult_valid};
pub use sparsity::SparseRows;
pub use text_format::{dump, load, Triplet, TripletIter};
pub use traits::{Matrix, Scalar};
pub use util::get_time;
