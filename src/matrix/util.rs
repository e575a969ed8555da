use std::fmt;

use crate::traits::{FloatScalar, Scalar};

use super::Matrix;

// ── Structure ───────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Transpose: (M×N) → (N×M), `t[(j, i)] = m[(i, j)]`.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let t = a.transpose();
    /// assert_eq!(t.nrows(), 3);
    /// assert_eq!(t.ncols(), 2);
    /// assert_eq!(t[(1, 0)], 2.0);
    /// assert_eq!(t[(0, 1)], 4.0);
    /// ```
    pub fn transpose(&self) -> Self {
        Matrix::from_fn(self.ncols(), self.nrows(), |i, j| self[(j, i)])
    }

    /// Sum of the diagonal elements.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(a.trace(), 5.0);
    /// ```
    pub fn trace(&self) -> T {
        let n = self.nrows().min(self.ncols());
        let mut s = T::zero();
        for i in 0..n {
            s = s + self[(i, i)];
        }
        s
    }

    /// Sum of all elements.
    pub fn sum(&self) -> T {
        let mut s = T::zero();
        for &x in self.data() {
            s = s + x;
        }
        s
    }

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            let n = self.ncols();
            for j in 0..n {
                self.data_mut().swap(a * n + j, b * n + j);
            }
        }
    }
}

// ── Map ─────────────────────────────────────────────────────────────

impl<T: Copy> Matrix<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_slice(2, 2, &[1.0_f64, 4.0, 9.0, 16.0]).unwrap();
    /// let r = m.map(|x| x.sqrt());
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U> {
        let data = self.data().iter().map(|&x| f(x)).collect();
        Matrix::from_parts(self.nrows(), self.ncols(), data)
    }
}

// ── Symmetry ────────────────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Whether the matrix is square and symmetric within `tol`:
    /// `|m[(i, j)] - m[(j, i)]| <= tol` for all i, j.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let s = Matrix::from_slice(2, 2, &[1.0, 2.0, 2.0, 3.0]).unwrap();
    /// assert!(s.is_symmetric(1e-12));
    ///
    /// let a = Matrix::from_slice(2, 2, &[1.0, 2.0, 2.5, 3.0]).unwrap();
    /// assert!(!a.is_symmetric(1e-12));
    /// ```
    pub fn is_symmetric(&self, tol: T) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.nrows();
        for i in 0..n {
            for j in (i + 1)..n {
                if (self[(i, j)] - self[(j, i)]).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// Row-by-row rendering: rows on separate lines, elements separated by
/// a single space. A debugging aid, not a stable format.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                if j > 0 {
                    write!(f, " ")?;
                }
                self.data()[i * self.ncols() + j].fmt(f)?;
            }
            if i + 1 < self.nrows() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
