use super::EigenError;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Eigenvalues and eigenvectors of a symmetric tridiagonal matrix,
/// produced by [`tridiagonal_ql`].
///
/// `eigenvalues[k]` pairs with column k of `q`. The order is whatever
/// the iteration produced — sorting happens in the pipeline, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct QlEigen<T> {
    /// Eigenvalues, unsorted.
    pub eigenvalues: Vec<T>,
    /// Orthogonal eigenvector matrix of the tridiagonal problem.
    pub q: Matrix<T>,
}

/// Maximum implicit QL sweeps per eigenvalue index before giving up.
const MAX_SWEEPS: usize = 30;

/// Diagonalize a symmetric tridiagonal matrix `(diag, off_diag)` by
/// implicit-shift QL iteration, accumulating the plane rotations into
/// an eigenvector matrix.
///
/// `off_diag` uses the [`householder_tridiagonalize`] alignment
/// (`off_diag[i]` above `diag[i]`, `off_diag[0]` unused); it is
/// re-aligned internally before iterating.
///
/// Fails with [`EigenError::ConvergenceFailure`] if any eigenvalue
/// needs more than 30 sweeps; this bounds runtime and is never expected
/// for genuinely symmetric input.
///
/// [`householder_tridiagonalize`]: super::householder_tridiagonalize
pub fn tridiagonal_ql<T: FloatScalar>(
    diag: &[T],
    off_diag: &[T],
) -> Result<QlEigen<T>, EigenError> {
    let n = diag.len();
    debug_assert_eq!(off_diag.len(), n);

    let mut d = diag.to_vec();
    let mut e = shift_subdiagonal(off_diag);
    let mut z = Matrix::<T>::identity(n);

    let two = T::one() + T::one();
    let eps = T::epsilon();

    for l in 0..n {
        let mut iter = 0usize;
        loop {
            // find the first negligible subdiagonal entry: [l, m] is
            // the active block
            let mut m = l;
            while m + 1 < n {
                let dd = d[m].abs() + d[m + 1].abs();
                if e[m].abs() <= eps * dd {
                    break;
                }
                m += 1;
            }
            if m == l {
                break; // eigenvalue l has deflated
            }
            if iter == MAX_SWEEPS {
                return Err(EigenError::ConvergenceFailure);
            }
            iter += 1;

            // Wilkinson shift from the trailing 2x2 of the block
            let mut g = (d[l + 1] - d[l]) / (two * e[l]);
            let mut r = pythag(g, T::one());
            g = d[m] - d[l] + e[l] / (g + sign(r, g));

            let mut s = T::one();
            let mut c = T::one();
            let mut p = T::zero();
            let mut underflow = false;

            // chase the bulge from m-1 down to l
            for i in (l..m).rev() {
                let mut f = s * e[i];
                let b = c * e[i];
                r = pythag(f, g);
                e[i + 1] = r;
                if r == T::zero() {
                    // rotation annihilated to zero; drop the shift
                    // correction and restart the sweep
                    d[i + 1] = d[i + 1] - p;
                    e[m] = T::zero();
                    underflow = true;
                    break;
                }
                s = f / r;
                c = g / r;
                g = d[i + 1] - p;
                r = (d[i] - g) * s + two * c * b;
                p = s * r;
                d[i + 1] = g + p;
                g = c * r - b;

                for k in 0..n {
                    f = z[(k, i + 1)];
                    z[(k, i + 1)] = s * z[(k, i)] + c * f;
                    z[(k, i)] = c * z[(k, i)] - s * f;
                }
            }

            if underflow {
                continue;
            }
            d[l] = d[l] - p;
            e[l] = g;
            e[m] = T::zero();
        }
    }

    Ok(QlEigen {
        eigenvalues: d,
        q: z,
    })
}

/// Eigenvalues of a symmetric tridiagonal matrix, without eigenvector
/// accumulation. Same iteration as [`tridiagonal_ql`] minus the
/// rotation of eigenvector columns.
pub fn tridiagonal_ql_values<T: FloatScalar>(
    diag: &[T],
    off_diag: &[T],
) -> Result<Vec<T>, EigenError> {
    let n = diag.len();
    debug_assert_eq!(off_diag.len(), n);

    let mut d = diag.to_vec();
    let mut e = shift_subdiagonal(off_diag);

    let two = T::one() + T::one();
    let eps = T::epsilon();

    for l in 0..n {
        let mut iter = 0usize;
        loop {
            let mut m = l;
            while m + 1 < n {
                let dd = d[m].abs() + d[m + 1].abs();
                if e[m].abs() <= eps * dd {
                    break;
                }
                m += 1;
            }
            if m == l {
                break;
            }
            if iter == MAX_SWEEPS {
                return Err(EigenError::ConvergenceFailure);
            }
            iter += 1;

            let mut g = (d[l + 1] - d[l]) / (two * e[l]);
            let mut r = pythag(g, T::one());
            g = d[m] - d[l] + e[l] / (g + sign(r, g));

            let mut s = T::one();
            let mut c = T::one();
            let mut p = T::zero();
            let mut underflow = false;

            for i in (l..m).rev() {
                let f = s * e[i];
                let b = c * e[i];
                r = pythag(f, g);
                e[i + 1] = r;
                if r == T::zero() {
                    d[i + 1] = d[i + 1] - p;
                    e[m] = T::zero();
                    underflow = true;
                    break;
                }
                s = f / r;
                c = g / r;
                g = d[i + 1] - p;
                r = (d[i] - g) * s + two * c * b;
                p = s * r;
                d[i + 1] = g + p;
                g = c * r - b;
            }

            if underflow {
                continue;
            }
            d[l] = d[l] - p;
            e[l] = g;
            e[m] = T::zero();
        }
    }

    Ok(d)
}

// Re-align the off-diagonal so e[i] sits between d[i] and d[i+1].
fn shift_subdiagonal<T: FloatScalar>(off_diag: &[T]) -> Vec<T> {
    let n = off_diag.len();
    let mut e = vec![T::zero(); n];
    for i in 1..n {
        e[i - 1] = off_diag[i];
    }
    e
}

/// `|a|` carrying the sign of `b`.
#[inline]
fn sign<T: FloatScalar>(a: T, b: T) -> T {
    if b >= T::zero() {
        a.abs()
    } else {
        -a.abs()
    }
}

/// `sqrt(a² + b²)` without destructive overflow or underflow: the
/// larger magnitude is factored out before squaring.
#[inline]
fn pythag<T: FloatScalar>(a: T, b: T) -> T {
    let absa = a.abs();
    let absb = b.abs();
    if absa > absb {
        let t = absb / absa;
        absa * (T::one() + t * t).sqrt()
    } else if absb == T::zero() {
        T::zero()
    } else {
        let t = absa / absb;
        absb * (T::one() + t * t).sqrt()
    }
}
