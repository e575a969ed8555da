pub(crate) mod eigsym;
pub(crate) mod householder;
pub(crate) mod ql;

pub use eigsym::SymmetricEigen;
pub use householder::{householder_tridiagonalize, Tridiagonal};
pub use ql::{tridiagonal_ql, tridiagonal_ql_values, QlEigen};

/// Errors from the symmetric eigendecomposition pipeline.
///
/// Returned by [`SymmetricEigen::new`] and the convenience methods
/// (`eig_symmetric`, `eigenvalues_symmetric`).
///
/// ```
/// use densemat::{Matrix, EigenError};
///
/// let rect = Matrix::<f64>::new(2, 3);
/// assert_eq!(
///     rect.eig_symmetric().unwrap_err(),
///     EigenError::NotSquare { nrows: 2, ncols: 3 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EigenError {
    /// Input matrix is not square.
    NotSquare {
        /// Row count of the offending matrix.
        nrows: usize,
        /// Column count of the offending matrix.
        ncols: usize,
    },
    /// Input matrix is not symmetric within the tolerance.
    NotSymmetric,
    /// QL iteration exceeded the sweep budget for some eigenvalue.
    ConvergenceFailure,
}

impl std::fmt::Display for EigenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EigenError::NotSquare { nrows, ncols } => {
                write!(f, "matrix is not square ({}x{})", nrows, ncols)
            }
            EigenError::NotSymmetric => write!(f, "matrix is not symmetric within tolerance"),
            EigenError::ConvergenceFailure => {
                write!(f, "QL iteration did not converge within the sweep budget")
            }
        }
    }
}

impl std::error::Error for EigenError {}
