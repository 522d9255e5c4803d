//! Rectangular container capability.

/// A rectangular (`rows × cols`) container of `T` values.
///
/// This is the whole capability set the container adapters need: element
/// read by `(row, col)`, a shape query, and construction of a fresh
/// instance of a given shape. Any matrix library can be plugged in by
/// implementing it; statlib ships implementations for
/// [`DenseMatrix`](crate::types::DenseMatrix) and for `Vec<T>` (treated as a
/// column vector).
///
/// # Example
///
/// ```
/// use stats_core::traits::Container;
/// use stats_core::types::DenseMatrix;
///
/// let m: DenseMatrix<f64> = Container::from_fn(2, 3, |r, c| (r * 10 + c) as f64);
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 2), 12.0);
/// ```
pub trait Container<T: Copy>: Sized {
    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;

    /// Element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Implementations may panic when the index is out of bounds.
    fn get(&self, row: usize, col: usize) -> T;

    /// Build a new container of the given shape, calling `f(row, col)` once
    /// per cell.
    ///
    /// # Panics
    ///
    /// Implementations with a fixed column count panic when asked for any
    /// other; `Vec<T>` accepts only `cols == 1` (or `rows == 0`).
    fn from_fn<F>(rows: usize, cols: usize, f: F) -> Self
    where
        F: FnMut(usize, usize) -> T;

    /// `(rows, cols)`.
    #[inline]
    fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Total number of cells.
    #[inline]
    fn len(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Whether the container has no cells.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A `Vec<T>` is an `n × 1` column vector.
///
/// [`Container::from_fn`] panics for `cols != 1` unless `rows == 0`; use
/// [`DenseMatrix`](crate::types::DenseMatrix) for general shapes.
impl<T: Copy> Container<T> for Vec<T> {
    #[inline]
    fn rows(&self) -> usize {
        self.len()
    }

    #[inline]
    fn cols(&self) -> usize {
        1
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> T {
        assert_eq!(col, 0, "column index {} out of bounds for a vector", col);
        self[row]
    }

    fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        assert!(
            cols == 1 || rows == 0,
            "a vector container must have exactly one column, got {}",
            cols
        );
        (0..rows).map(|r| f(r, 0)).collect()
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}
