//! Support code for the `densemat` binary: row-index files, output handling
//! and the `info` summary.

pub mod error;
pub mod output;
pub mod row_indices;
pub mod summary;

pub use error::CliError;
pub use output::write_output;
pub use row_indices::{parse_row_indices, read_row_indices, render_row_indices};
pub use summary::MatrixSummary;
