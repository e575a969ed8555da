use std::cmp::Ordering;

use super::householder::householder_tridiagonalize;
use super::ql::{tridiagonal_ql, tridiagonal_ql_values};
use super::EigenError;
use crate::traits::FloatScalar;
use crate::Matrix;

// Asymmetry beyond this is rejected rather than silently symmetrized.
fn default_symmetry_tol<T: FloatScalar>() -> T {
    T::from(1e-8).unwrap_or_else(T::epsilon)
}

/// Eigendecomposition of a real symmetric matrix.
///
/// Computed by Householder tridiagonalization followed by
/// implicit-shift QL iteration. Eigenvalues are sorted ascending;
/// column k of the eigenvector matrix is the unit eigenvector for
/// `eigenvalues()[k]`, and the columns are pairwise orthogonal.
///
/// # Example
///
/// ```
/// use densemat::Matrix;
/// use densemat::linalg::SymmetricEigen;
///
/// let a = Matrix::from_slice(2, 2, &[2.0_f64, -1.0, -1.0, 2.0]).unwrap();
/// let eig = SymmetricEigen::new(&a).unwrap();
/// assert!((eig.eigenvalues()[0] - 1.0).abs() < 1e-10);
/// assert!((eig.eigenvalues()[1] - 3.0).abs() < 1e-10);
///
/// // A·v ≈ λ·v for the first eigenpair
/// let q = eig.eigenvectors();
/// for i in 0..2 {
///     let av = a[(i, 0)] * q[(0, 0)] + a[(i, 1)] * q[(1, 0)];
///     assert!((av - eig.eigenvalues()[0] * q[(i, 0)]).abs() < 1e-10);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricEigen<T> {
    eigenvalues: Vec<T>,
    eigenvectors: Matrix<T>,
}

impl<T: FloatScalar> SymmetricEigen<T> {
    /// Decompose a real symmetric matrix.
    ///
    /// Fails with [`EigenError::NotSquare`] for rectangular input,
    /// [`EigenError::NotSymmetric`] when any off-diagonal pair differs
    /// by more than 1e-8, and [`EigenError::ConvergenceFailure`] if QL
    /// iteration exceeds its sweep budget. The input is never modified.
    pub fn new(a: &Matrix<T>) -> Result<Self, EigenError> {
        Self::with_tolerance(a, default_symmetry_tol())
    }

    /// Decompose with an explicit symmetry tolerance.
    pub fn with_tolerance(a: &Matrix<T>, tol: T) -> Result<Self, EigenError> {
        check_input(a, tol)?;
        let n = a.nrows();

        let tri = householder_tridiagonalize(a, true);
        let ql = tridiagonal_ql(&tri.diag, &tri.off_diag)?;

        // eigenvectors of A = (Householder transform) x (QL rotations)
        let q_house = tri.q.unwrap_or_else(|| Matrix::identity(n));
        let p = &q_house * &ql.q;

        // Stable index sort so eigenvector columns travel with their
        // eigenvalues and ties keep QL order.
        let mut idx: Vec<usize> = (0..n).collect();
        idx.sort_by(|&i, &j| {
            ql.eigenvalues[i]
                .partial_cmp(&ql.eigenvalues[j])
                .unwrap_or(Ordering::Equal)
        });

        let mut eigenvalues = Vec::with_capacity(n);
        let mut eigenvectors = Matrix::new(n, n);
        for (k, &j) in idx.iter().enumerate() {
            eigenvalues.push(ql.eigenvalues[j]);
            for row in 0..n {
                eigenvectors[(row, k)] = p[(row, j)];
            }
        }

        Ok(Self {
            eigenvalues,
            eigenvectors,
        })
    }

    /// Compute eigenvalues only, skipping eigenvector accumulation in
    /// both stages (cheaper). Result is sorted ascending.
    pub fn eigenvalues_only(a: &Matrix<T>) -> Result<Vec<T>, EigenError> {
        check_input(a, default_symmetry_tol())?;
        let tri = householder_tridiagonalize(a, false);
        let mut vals = tridiagonal_ql_values(&tri.diag, &tri.off_diag)?;
        vals.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        Ok(vals)
    }

    /// The eigenvalues, sorted ascending.
    #[inline]
    pub fn eigenvalues(&self) -> &[T] {
        &self.eigenvalues
    }

    /// The orthonormal eigenvector matrix (columns are eigenvectors).
    #[inline]
    pub fn eigenvectors(&self) -> &Matrix<T> {
        &self.eigenvectors
    }
}

fn check_input<T: FloatScalar>(a: &Matrix<T>, tol: T) -> Result<(), EigenError> {
    if !a.is_square() {
        return Err(EigenError::NotSquare {
            nrows: a.nrows(),
            ncols: a.ncols(),
        });
    }
    if !a.is_symmetric(tol) {
        return Err(EigenError::NotSymmetric);
    }
    Ok(())
}

/// Convenience methods for symmetric eigendecomposition.
impl<T: FloatScalar> Matrix<T> {
    /// Symmetric eigendecomposition.
    ///
    /// Returns ascending eigenvalues with matching eigenvector columns.
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let a = Matrix::from_slice(2, 2, &[5.0_f64, 2.0, 2.0, 2.0]).unwrap();
    /// let eig = a.eig_symmetric().unwrap();
    /// assert!((eig.eigenvalues()[0] - 1.0).abs() < 1e-10);
    /// assert!((eig.eigenvalues()[1] - 6.0).abs() < 1e-10);
    /// ```
    pub fn eig_symmetric(&self) -> Result<SymmetricEigen<T>, EigenError> {
        SymmetricEigen::new(self)
    }

    /// Eigenvalues of a symmetric matrix, ascending (no eigenvectors).
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let a = Matrix::from_slice(2, 2, &[3.0_f64, 1.0, 1.0, 3.0]).unwrap();
    /// let vals = a.eigenvalues_symmetric().unwrap();
    /// assert!((vals[0] - 2.0).abs() < 1e-10);
    /// assert!((vals[1] - 4.0).abs() < 1e-10);
    /// ```
    pub fn eigenvalues_symmetric(&self) -> Result<Vec<T>, EigenError> {
        SymmetricEigen::eigenvalues_only(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
        assert!(
            (a - b).abs() < tol,
            "{}: {} vs {} (diff {})",
            msg,
            a,
            b,
            (a - b).abs()
        );
    }

    #[test]
    fn identity_eigenvalues() {
        let id = Matrix::<f64>::identity(3);
        let eig = id.eig_symmetric().unwrap();
        for i in 0..3 {
            assert_near(eig.eigenvalues()[i], 1.0, TOL, &format!("λ[{}]", i));
        }
        let q = eig.eigenvectors();
        let qtq = &q.transpose() * q;
        assert!((&qtq - &Matrix::identity(3)).norm_fro() < TOL);
    }

    #[test]
    fn known_2x2() {
        let a = Matrix::from_slice(2, 2, &[2.0, -1.0, -1.0, 2.0]).unwrap();
        let eig = a.eig_symmetric().unwrap();
        assert_near(eig.eigenvalues()[0], 1.0, TOL, "λ[0]");
        assert_near(eig.eigenvalues()[1], 3.0, TOL, "λ[1]");
    }

    #[test]
    fn negative_eigenvalues() {
        let a = Matrix::from_slice(2, 2, &[1.0, 3.0, 3.0, 1.0]).unwrap();
        let eig = a.eig_symmetric().unwrap();
        assert_near(eig.eigenvalues()[0], -2.0, TOL, "λ[0]");
        assert_near(eig.eigenvalues()[1], 4.0, TOL, "λ[1]");
    }

    #[test]
    fn known_3x3_eigenvectors() {
        let a =
            Matrix::from_slice(3, 3, &[2.0, 1.0, 0.0, 1.0, 3.0, 1.0, 0.0, 1.0, 2.0]).unwrap();
        let eig = a.eig_symmetric().unwrap();
        let q = eig.eigenvectors();

        for col in 0..3 {
            let lambda = eig.eigenvalues()[col];
            for row in 0..3 {
                let mut av = 0.0;
                for k in 0..3 {
                    av += a[(row, k)] * q[(k, col)];
                }
                assert_near(
                    av,
                    lambda * q[(row, col)],
                    TOL,
                    &format!("Av=λv [({},{})]", row, col),
                );
            }
        }
    }

    #[test]
    fn eigenvalues_only_agrees() {
        let a = Matrix::from_slice(
            3,
            3,
            &[4.0, 1.0, -1.0, 1.0, 3.0, 2.0, -1.0, 2.0, 5.0],
        )
        .unwrap();
        let full = a.eig_symmetric().unwrap();
        let vals = a.eigenvalues_symmetric().unwrap();
        for (x, y) in full.eigenvalues().iter().zip(vals.iter()) {
            assert_near(*x, *y, TOL, "eigenvalue");
        }
    }

    #[test]
    fn trace_equals_eigenvalue_sum() {
        let r = Matrix::<f64>::random(5, 5);
        let a = (&r + &r.transpose()) * 0.5;
        let eig = a.eig_symmetric().unwrap();
        let sum: f64 = eig.eigenvalues().iter().sum();
        assert_near(sum, a.trace(), 1e-9, "trace");
    }

    #[test]
    fn non_square_rejected() {
        let a = Matrix::<f64>::new(2, 3);
        assert_eq!(
            a.eig_symmetric().unwrap_err(),
            EigenError::NotSquare { nrows: 2, ncols: 3 }
        );
        assert!(a.eigenvalues_symmetric().is_err());
    }

    #[test]
    fn asymmetric_rejected() {
        let mut a = Matrix::<f64>::identity(3);
        a[(0, 2)] = 1e-6; // asymmetry well beyond 1e-8
        assert_eq!(a.eig_symmetric().unwrap_err(), EigenError::NotSymmetric);
    }

    #[test]
    fn tiny_asymmetry_tolerated() {
        let mut a = Matrix::<f64>::identity(3);
        a[(0, 2)] = 1e-9; // within the 1e-8 default tolerance
        assert!(a.eig_symmetric().is_ok());
    }

    #[test]
    fn f32_support() {
        let a = Matrix::from_slice(2, 2, &[2.0_f32, -1.0, -1.0, 2.0]).unwrap();
        let eig = a.eig_symmetric().unwrap();
        assert!((eig.eigenvalues()[0] - 1.0).abs() < 1e-5);
        assert!((eig.eigenvalues()[1] - 3.0).abs() < 1e-5);
    }
}
