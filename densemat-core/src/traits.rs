use num_traits::Float;
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// Element type a dense matrix can hold.
///
/// Blanket-implemented for every float that can also be printed and parsed,
/// which in practice means `f64` and `f32`.
pub trait Scalar: Float + Debug + Display + FromStr + Default + Send + Sync {}

impl<T> Scalar for T where T: Float + Debug + Display + FromStr + Default + Send + Sync {}

/// Generic trait representing a matrix shape.
pub trait Matrix: Debug {
    /// The underlying numeric type of the matrix elements (e.g., f64, f32).
    type Value: Scalar;

    /// Returns the dimensions of the matrix as (rows, columns).
    fn dims(&self) -> (usize, usize);

    /// Returns the number of rows.
    fn rows(&self) -> usize {
        self.dims().0
    }

    /// Returns the number of columns.
    fn cols(&self) -> usize {
        self.dims().1
    }

    /// Checks if the matrix is square.
    fn is_square(&self) -> bool {
        let (rows, cols) = self.dims();
        rows == cols
    }
}
