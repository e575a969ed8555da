use crate::traits::FloatScalar;
use crate::Matrix;

/// Symmetric tridiagonal form produced by [`householder_tridiagonalize`].
///
/// `diag[i]` is the diagonal entry `T_{i,i}`; `off_diag[i]` is the
/// off-diagonal entry `T_{i,i-1}` (so `off_diag[0]` is always zero).
/// `q` holds the accumulated orthogonal transform with
/// `Qᵗ A Q = T`, and is `Some` iff accumulation was requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Tridiagonal<T> {
    /// Diagonal of the tridiagonal matrix, length n.
    pub diag: Vec<T>,
    /// Off-diagonal of the tridiagonal matrix, length n, `off_diag[0] == 0`.
    pub off_diag: Vec<T>,
    /// Accumulated Householder transform, present iff requested.
    pub q: Option<Matrix<T>>,
}

/// Reduce a real symmetric matrix to tridiagonal form with Householder
/// reflections.
///
/// The input must be square and symmetric; the eigendecomposition
/// pipeline enforces this before calling. When `accumulate` is true the
/// product of the n−2 reflections is back-accumulated into an
/// orthogonal matrix Q; skipping accumulation is cheaper when only
/// eigenvalues are needed.
///
/// The input is read but never modified; all mutation happens in a
/// working copy owned by this call.
pub fn householder_tridiagonalize<T: FloatScalar>(
    a: &Matrix<T>,
    accumulate: bool,
) -> Tridiagonal<T> {
    let n = a.nrows();
    debug_assert_eq!(n, a.ncols(), "householder_tridiagonalize requires a square matrix");

    let mut z = a.clone();
    let mut d = vec![T::zero(); n];
    let mut e = vec![T::zero(); n];

    if n == 0 {
        return Tridiagonal {
            diag: d,
            off_diag: e,
            q: accumulate.then(|| z),
        };
    }

    // Reflections from the bottom row up. Each pass zeroes row i left
    // of the subdiagonal and stores the reflector in the working copy
    // for later back-accumulation.
    for i in (1..n).rev() {
        let l = i - 1;
        let mut h = T::zero();
        if l > 0 {
            let mut scale = T::zero();
            for k in 0..i {
                scale = scale + z[(i, k)].abs();
            }
            if scale == T::zero() {
                // row already reduced
                e[i] = z[(i, l)];
            } else {
                for k in 0..i {
                    z[(i, k)] = z[(i, k)] / scale;
                    h = h + z[(i, k)] * z[(i, k)];
                }
                // Reflect opposite to the sign of the subdiagonal entry
                // so f - g cannot cancel.
                let f = z[(i, l)];
                let g = if f >= T::zero() { -h.sqrt() } else { h.sqrt() };
                e[i] = scale * g;
                h = h - f * g;
                z[(i, l)] = f - g;

                let mut f_sum = T::zero();
                for j in 0..i {
                    if accumulate {
                        // stash v/h for the back-accumulation pass
                        z[(j, i)] = z[(i, j)] / h;
                    }
                    // g = (A·v)_j over the active submatrix
                    let mut g = T::zero();
                    for k in 0..=j {
                        g = g + z[(j, k)] * z[(i, k)];
                    }
                    for k in (j + 1)..i {
                        g = g + z[(k, j)] * z[(i, k)];
                    }
                    e[j] = g / h;
                    f_sum = f_sum + e[j] * z[(i, j)];
                }

                // rank-2 similarity update A ← A - v·wᵗ - w·vᵗ
                let hh = f_sum / (h + h);
                for j in 0..i {
                    let f = z[(i, j)];
                    let g = e[j] - hh * f;
                    e[j] = g;
                    for k in 0..=j {
                        z[(j, k)] = z[(j, k)] - f * e[k] - g * z[(i, k)];
                    }
                }
            }
        } else {
            e[i] = z[(i, l)];
        }
        d[i] = h;
    }

    if accumulate {
        d[0] = T::zero();
    }
    e[0] = T::zero();

    // Second pass: back-accumulate the stored reflections into Q,
    // restoring the identity pattern column by column.
    for i in 0..n {
        if accumulate {
            if d[i] != T::zero() {
                for j in 0..i {
                    let mut g = T::zero();
                    for k in 0..i {
                        g = g + z[(i, k)] * z[(k, j)];
                    }
                    for k in 0..i {
                        z[(k, j)] = z[(k, j)] - g * z[(k, i)];
                    }
                }
            }
            d[i] = z[(i, i)];
            z[(i, i)] = T::one();
            for j in 0..i {
                z[(j, i)] = T::zero();
                z[(i, j)] = T::zero();
            }
        } else {
            d[i] = z[(i, i)];
        }
    }

    Tridiagonal {
        diag: d,
        off_diag: e,
        q: accumulate.then(|| z),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn random_symmetric(n: usize) -> Matrix<f64> {
        let r = Matrix::<f64>::random(n, n);
        (&r + &r.transpose()) * 0.5
    }

    // Rebuild the tridiagonal matrix T from (d, e).
    fn tridiag_matrix(d: &[f64], e: &[f64]) -> Matrix<f64> {
        let n = d.len();
        let mut t = Matrix::new(n, n);
        for i in 0..n {
            t[(i, i)] = d[i];
            if i > 0 {
                t[(i, i - 1)] = e[i];
                t[(i - 1, i)] = e[i];
            }
        }
        t
    }

    #[test]
    fn similarity_transform_holds() {
        for n in [2, 3, 5, 8] {
            let a = random_symmetric(n);
            let tri = householder_tridiagonalize(&a, true);
            let q = tri.q.unwrap();

            // Qᵗ A Q should equal tridiag(d, e)
            let t = &q.transpose() * &(&a * &q);
            let expected = tridiag_matrix(&tri.diag, &tri.off_diag);
            assert!(
                (&t - &expected).norm_fro() < 1e-12 * (n as f64),
                "similarity failed for n={}",
                n
            );
        }
    }

    #[test]
    fn q_is_orthogonal() {
        let a = random_symmetric(6);
        let tri = householder_tridiagonalize(&a, true);
        let q = tri.q.unwrap();
        let qtq = &q.transpose() * &q;
        assert!((&qtq - &Matrix::identity(6)).norm_fro() < 1e-13);
    }

    #[test]
    fn interior_is_tridiagonal() {
        let a = random_symmetric(7);
        let tri = householder_tridiagonalize(&a, true);
        let q = tri.q.unwrap();
        let t = &q.transpose() * &(&a * &q);
        for i in 0..7usize {
            for j in 0..7 {
                if i.abs_diff(j) > 1 {
                    assert!(t[(i, j)].abs() < 1e-13, "T[({},{})] = {}", i, j, t[(i, j)]);
                }
            }
        }
    }

    #[test]
    fn off_diag_first_entry_zero() {
        let a = random_symmetric(5);
        let tri = householder_tridiagonalize(&a, false);
        assert_eq!(tri.off_diag[0], 0.0);
        assert!(tri.q.is_none());
    }

    #[test]
    fn one_by_one() {
        let mut a = Matrix::<f64>::new(1, 1);
        a[(0, 0)] = 2.5;
        let tri = householder_tridiagonalize(&a, true);
        assert_eq!(tri.diag, vec![2.5]);
        assert_eq!(tri.off_diag, vec![0.0]);
        assert_eq!(tri.q.unwrap(), Matrix::identity(1));
    }

    #[test]
    fn empty_matrix() {
        let a = Matrix::<f64>::new(0, 0);
        let tri = householder_tridiagonalize(&a, true);
        assert!(tri.diag.is_empty());
        assert!(tri.off_diag.is_empty());
        assert_eq!(tri.q.unwrap().nrows(), 0);
    }

    #[test]
    fn already_tridiagonal_input() {
        // zero scale path: rows left of the subdiagonal are all zero
        let t_in = tridiag_matrix(&[1.0, 2.0, 3.0, 4.0], &[0.0, 0.5, -0.25, 1.5]);
        let tri = householder_tridiagonalize(&t_in, true);
        let q = tri.q.unwrap();
        let t = &q.transpose() * &(&t_in * &q);
        let expected = tridiag_matrix(&tri.diag, &tri.off_diag);
        assert!((&t - &expected).norm_fro() < 1e-13);
    }
}
