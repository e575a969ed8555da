use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;

use super::{Matrix, ShapeError};

// ── Checked arithmetic ──────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Elementwise sum, failing with [`ShapeError::Incompatible`] when
    /// shapes differ.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let b = Matrix::from_slice(2, 2, &[5.0, 6.0, 7.0, 8.0]).unwrap();
    /// let c = a.checked_add(&b).unwrap();
    /// assert_eq!(c[(1, 1)], 12.0);
    ///
    /// let wide = Matrix::<f64>::new(2, 3);
    /// assert!(a.checked_add(&wide).is_err());
    /// ```
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, ShapeError> {
        self.same_shape(rhs)?;
        Ok(self.zip_with(rhs, |a, b| a + b))
    }

    /// Elementwise difference, failing with [`ShapeError::Incompatible`]
    /// when shapes differ.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, ShapeError> {
        self.same_shape(rhs)?;
        Ok(self.zip_with(rhs, |a, b| a - b))
    }

    /// Matrix product, failing with [`ShapeError::Incompatible`] when
    /// `self.ncols() != rhs.nrows()`.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let b = Matrix::from_slice(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();
    /// let c = a.checked_mul(&b).unwrap();
    /// assert_eq!(c[(0, 0)], 58.0);
    ///
    /// assert!(b.checked_mul(&b).is_err());
    /// ```
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, ShapeError> {
        if self.ncols() != rhs.nrows() {
            return Err(ShapeError::Incompatible {
                left: (self.nrows(), self.ncols()),
                right: (rhs.nrows(), rhs.ncols()),
            });
        }
        Ok(self.mul_unchecked(rhs))
    }

    fn same_shape(&self, rhs: &Self) -> Result<(), ShapeError> {
        if self.nrows() != rhs.nrows() || self.ncols() != rhs.ncols() {
            return Err(ShapeError::Incompatible {
                left: (self.nrows(), self.ncols()),
                right: (rhs.nrows(), rhs.ncols()),
            });
        }
        Ok(())
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        let data = self
            .data()
            .iter()
            .zip(rhs.data().iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Matrix::from_parts(self.nrows(), self.ncols(), data)
    }

    // Triple-loop product with the shape check already done.
    fn mul_unchecked(&self, rhs: &Self) -> Self {
        let m = self.nrows();
        let n = self.ncols();
        let p = rhs.ncols();
        let mut data = vec![T::zero(); m * p];
        for i in 0..m {
            for k in 0..n {
                let a_ik = self.data()[i * n + k];
                for j in 0..p {
                    data[i * p + j] = data[i * p + j] + a_ik * rhs.data()[k * p + j];
                }
            }
        }
        Matrix::from_parts(m, p, data)
    }
}

// ── Elementwise addition ────────────────────────────────────────────

impl<T: Scalar> Add for Matrix<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self + rhs
    }
}

impl<T: Scalar> Add<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        self + &rhs
    }
}

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            (self.nrows(), self.ncols()),
            (rhs.nrows(), rhs.ncols()),
            "dimension mismatch: {}x{} + {}x{}",
            self.nrows(),
            self.ncols(),
            rhs.nrows(),
            rhs.ncols(),
        );
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Scalar> AddAssign for Matrix<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.add_assign(&rhs);
    }
}

impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(
            (self.nrows(), self.ncols()),
            (rhs.nrows(), rhs.ncols()),
            "dimension mismatch: {}x{} += {}x{}",
            self.nrows(),
            self.ncols(),
            rhs.nrows(),
            rhs.ncols(),
        );
        for (a, &b) in self.data_mut().iter_mut().zip(rhs.data().iter()) {
            *a = *a + b;
        }
    }
}

// ── Elementwise subtraction ─────────────────────────────────────────

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self - rhs
    }
}

impl<T: Scalar> Sub<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        self - &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            (self.nrows(), self.ncols()),
            (rhs.nrows(), rhs.ncols()),
            "dimension mismatch: {}x{} - {}x{}",
            self.nrows(),
            self.ncols(),
            rhs.nrows(),
            rhs.ncols(),
        );
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Scalar> SubAssign for Matrix<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_assign(&rhs);
    }
}

impl<T: Scalar> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(
            (self.nrows(), self.ncols()),
            (rhs.nrows(), rhs.ncols()),
            "dimension mismatch: {}x{} -= {}x{}",
            self.nrows(),
            self.ncols(),
            rhs.nrows(),
            rhs.ncols(),
        );
        for (a, &b) in self.data_mut().iter_mut().zip(rhs.data().iter()) {
            *a = *a - b;
        }
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        let data = self.data().iter().map(|&x| T::zero() - x).collect();
        Matrix::from_parts(self.nrows(), self.ncols(), data)
    }
}

// ── Matrix multiplication: (M×N) * (N×P) → (M×P) ────────────────────

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        self * &rhs
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.ncols(),
            rhs.nrows(),
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows(),
            self.ncols(),
            rhs.nrows(),
            rhs.ncols(),
        );
        self.mul_unchecked(rhs)
    }
}

// ── Scalar multiplication: matrix * scalar ──────────────────────────

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        &self * rhs
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        let data = self.data().iter().map(|&x| x * rhs).collect();
        Matrix::from_parts(self.nrows(), self.ncols(), data)
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        for x in self.data_mut().iter_mut() {
            *x = *x * rhs;
        }
    }
}

// ── scalar * matrix (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i32, i64);

// ── Scalar division: matrix / scalar ────────────────────────────────

impl<T: Scalar> Div<T> for Matrix<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        &self / rhs
    }
}

impl<T: Scalar> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: T) -> Matrix<T> {
        let data = self.data().iter().map(|&x| x / rhs).collect();
        Matrix::from_parts(self.nrows(), self.ncols(), data)
    }
}

impl<T: Scalar> DivAssign<T> for Matrix<T> {
    fn div_assign(&mut self, rhs: T) {
        for x in self.data_mut().iter_mut() {
            *x = *x / rhs;
        }
    }
}
