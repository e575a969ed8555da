use crate::traits::FloatScalar;

use super::Matrix;

impl<T: FloatScalar> Matrix<T> {
    /// Frobenius norm: square root of the sum of squared elements.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_slice(2, 2, &[3.0_f64, 0.0, 0.0, 4.0]).unwrap();
    /// assert!((m.norm_fro() - 5.0).abs() < 1e-12);
    /// ```
    pub fn norm_fro(&self) -> T {
        let mut sum = T::zero();
        for &x in self.data() {
            sum = sum + x * x;
        }
        sum.sqrt()
    }

    /// Largest absolute element value.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_slice(2, 2, &[1.0_f64, -7.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.norm_max(), 7.0);
    /// ```
    pub fn norm_max(&self) -> T {
        let mut max = T::zero();
        for &x in self.data() {
            if x.abs() > max {
                max = x.abs();
            }
        }
        max
    }
}
