mod norm;
mod ops;
mod util;

use std::ops::{Index, IndexMut};

use rand::distributions::uniform::SampleUniform;
use rand::Rng;

use crate::traits::Scalar;

/// Shape errors from matrix construction and checked arithmetic.
///
/// Returned by the fallible flat-buffer constructors and the
/// `checked_add` / `checked_sub` / `checked_mul` methods.
///
/// # Example
///
/// ```
/// use densemat::{Matrix, ShapeError};
///
/// let err = Matrix::<f64>::from_vec(2, 2, vec![1.0, 2.0, 3.0]).unwrap_err();
/// assert_eq!(err, ShapeError::BufferSize { len: 3, nrows: 2, ncols: 2 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// Flat buffer length does not equal `nrows * ncols`.
    BufferSize {
        /// Length of the supplied buffer.
        len: usize,
        /// Requested row count.
        nrows: usize,
        /// Requested column count.
        ncols: usize,
    },
    /// Operand shapes are incompatible for the attempted operation.
    Incompatible {
        /// Shape of the left operand as `(rows, cols)`.
        left: (usize, usize),
        /// Shape of the right operand as `(rows, cols)`.
        right: (usize, usize),
    },
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::BufferSize { len, nrows, ncols } => {
                write!(
                    f,
                    "buffer length {} does not match {}x{} matrix",
                    len, nrows, ncols
                )
            }
            ShapeError::Incompatible { left, right } => {
                write!(
                    f,
                    "incompatible shapes: {}x{} and {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// Dense heap-allocated matrix with runtime dimensions.
///
/// Row-major `Vec<T>` storage: element `(i, j)` lives at index
/// `i * ncols + j`. The matrix exclusively owns its storage; `Clone`
/// is a deep copy and `PartialEq` is exact elementwise equality.
///
/// # Examples
///
/// ```
/// use densemat::Matrix;
///
/// let a = Matrix::from_slice(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let id = Matrix::<f64>::identity(3);
/// assert_eq!(id[(0, 0)], 1.0);
/// assert_eq!(id[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create an `nrows x ncols` matrix filled with zeros.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::<f64>::new(2, 3);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `nrows x ncols` matrix filled with zeros.
    ///
    /// Alias for [`Matrix::new`], matching the other named factories.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::new(nrows, ncols)
    }

    /// Create an `nrows x ncols` matrix filled with ones.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::<f64>::ones(3, 2);
    /// assert_eq!(m[(2, 1)], 1.0);
    /// ```
    pub fn ones(nrows: usize, ncols: usize) -> Self {
        Self::fill(nrows, ncols, T::one())
    }

    /// Create a matrix filled with a given value.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::fill(2, 3, 7.0_f64);
    /// assert_eq!(m[(0, 0)], 7.0);
    /// assert_eq!(m[(1, 2)], 7.0);
    /// ```
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let id = Matrix::<f64>::identity(3);
    /// assert_eq!(id[(1, 1)], 1.0);
    /// assert_eq!(id[(2, 0)], 0.0);
    /// ```
    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a matrix of i.i.d. uniform draws in `[0, 1)`.
    ///
    /// Each call draws from the thread-local generator, so concurrent
    /// invocations on separate threads need no coordination.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::<f64>::random(4, 3);
    /// assert!((0..4).all(|i| (0..3).all(|j| (0.0..1.0).contains(&m[(i, j)]))));
    /// ```
    pub fn random(nrows: usize, ncols: usize) -> Self
    where
        T: SampleUniform + PartialOrd,
    {
        let mut rng = rand::thread_rng();
        let data = (0..nrows * ncols)
            .map(|_| rng.gen_range(T::zero()..T::one()))
            .collect();
        Self { data, nrows, ncols }
    }

    /// Create a matrix from an owned `Vec<T>` in row-major order.
    ///
    /// Fails with [`ShapeError::BufferSize`] if
    /// `data.len() != nrows * ncols`.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m[(1, 0)], 3.0);
    ///
    /// assert!(Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]).is_err());
    /// ```
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, ShapeError> {
        if data.len() != nrows * ncols {
            return Err(ShapeError::BufferSize {
                len: data.len(),
                nrows,
                ncols,
            });
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Fails with [`ShapeError::BufferSize`] if
    /// `slice.len() != nrows * ncols`.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_slice(nrows: usize, ncols: usize, slice: &[T]) -> Result<Self, ShapeError> {
        Self::from_vec(nrows, ncols, slice.to_vec())
    }
}

impl<T> Matrix<T> {
    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Total number of elements (`nrows * ncols`).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// The backing storage as a row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    // Row-major flat index. Column bound is checked explicitly: a
    // too-large `col` would otherwise alias into the next row.
    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols,
        );
        row * self.ncols + col
    }

    // Constructor for module-internal use where the invariant is
    // upheld by the caller.
    pub(crate) fn from_parts(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), nrows * ncols);
        Self { data, nrows, ncols }
    }

    pub(crate) fn data(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[self.idx(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let i = self.idx(row, col);
        &mut self.data[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zero_filled() {
        let m = Matrix::<f64>::new(3, 4);
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 4);
        assert_eq!(m.len(), 12);
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(m[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn shape_invariant() {
        for (r, c) in [(0, 0), (1, 5), (4, 1), (3, 3), (7, 2)] {
            let m = Matrix::<f64>::random(r, c);
            assert_eq!(m.as_slice().len(), m.nrows() * m.ncols());
        }
    }

    #[test]
    fn ones() {
        let m = Matrix::<f64>::ones(3, 2);
        for i in 0..3 {
            for j in 0..2 {
                assert_eq!(m[(i, j)], 1.0);
            }
        }
    }

    #[test]
    fn identity() {
        let id = Matrix::<f64>::identity(5);
        for i in 0..5 {
            for j in 0..5 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(id[(i, j)], expected);
            }
        }
    }

    #[test]
    fn random_in_unit_interval() {
        let m = Matrix::<f64>::random(6, 6);
        for &x in m.as_slice() {
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn from_vec_row_major() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m[(1, 2)], 6.0);
    }

    #[test]
    fn from_vec_wrong_length() {
        let err = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::BufferSize {
                len: 3,
                nrows: 2,
                ncols: 2
            }
        );
    }

    #[test]
    fn from_fn() {
        let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
        assert_eq!(m[(0, 0)], 0.0);
        assert_eq!(m[(1, 1)], 4.0);
        assert_eq!(m[(2, 2)], 8.0);
    }

    #[test]
    fn index_mut_and_equality() {
        let mut a = Matrix::<f64>::new(2, 2);
        a[(0, 0)] = 1.5;
        a[(0, 1)] = -2.0;
        a[(1, 0)] = 3.0;
        a[(1, 1)] = 4.5;

        let b = a.clone();
        assert_eq!(a, b);

        a[(1, 1)] = 0.0;
        assert_ne!(a, b);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_out_of_bounds_col() {
        let m = Matrix::<f64>::new(3, 2);
        let _ = m[(0, 2)];
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_mut_out_of_bounds_row() {
        let mut m = Matrix::<f64>::new(3, 2);
        m[(3, 0)] = 1.0;
    }

    #[test]
    fn is_square() {
        assert!(Matrix::<f64>::new(3, 3).is_square());
        assert!(!Matrix::<f64>::new(2, 3).is_square());
    }

    #[test]
    fn shape_error_display() {
        let e = ShapeError::BufferSize {
            len: 3,
            nrows: 2,
            ncols: 2,
        };
        assert_eq!(e.to_string(), "buffer length 3 does not match 2x2 matrix");

        let e = ShapeError::Incompatible {
            left: (2, 3),
            right: (2, 2),
        };
        assert_eq!(e.to_string(), "incompatible shapes: 2x3 and 2x2");
    }
}
