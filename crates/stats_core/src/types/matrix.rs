//! Owned column-major dense matrix.

use crate::traits::Container;
use crate::types::DistributionError;

/// Owned, column-major `rows × cols` matrix.
///
/// The default container back-end for the matrix overloads. Storage order
/// matches the usual BLAS/LAPACK convention: element `(r, c)` lives at
/// `data[c * rows + r]`.
///
/// # Examples
///
/// ```
/// use stats_core::types::DenseMatrix;
///
/// let m = DenseMatrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(m.get(0, 1), 3.0);
/// assert_eq!(m.get(1, 0), 2.0);
///
/// assert!(DenseMatrix::new(2, 2, vec![1.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DenseMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy> DenseMatrix<T> {
    /// Wrap column-major `data` as a `rows × cols` matrix.
    ///
    /// # Errors
    ///
    /// `DistributionError::ShapeMismatch` if `data.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, DistributionError> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(DistributionError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// A `rows × cols` matrix with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        self.data[col * self.rows + row]
    }

    /// Column-major view of the storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable column-major view of the storage.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix, returning column-major storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Row `row` as an owned vector.
    pub fn row(&self, row: usize) -> Vec<T> {
        (0..self.cols).map(|c| self.get(row, c)).collect()
    }
}

impl<T: Copy> Container<T> for DenseMatrix<T> {
    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> T {
        DenseMatrix::get(self, row, col)
    }

    fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for c in 0..cols {
            for r in 0..rows {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }
}
