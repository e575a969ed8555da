//! # densemat
//!
//! Dense-matrix library with a self-contained real symmetric
//! eigensolver: Householder tridiagonalization followed by
//! implicit-shift QL iteration, with no external linear-algebra
//! backend.
//!
//! ## Quick start
//!
//! ```
//! use densemat::Matrix;
//!
//! // Eigendecomposition of a symmetric matrix
//! let a = Matrix::from_slice(3, 3, &[
//!     2.0_f64, 1.0, 0.0,
//!     1.0, 3.0, 1.0,
//!     0.0, 1.0, 2.0,
//! ]).unwrap();
//!
//! let eig = a.eig_symmetric().unwrap();
//!
//! // Eigenvalues come back ascending; column k of the eigenvector
//! // matrix pairs with eigenvalue k.
//! let vals = eig.eigenvalues();
//! assert!(vals.windows(2).all(|w| w[0] <= w[1]));
//!
//! // A ≈ P diag(Λ) Pᵗ
//! let p = eig.eigenvectors();
//! let mut lambda = Matrix::<f64>::new(3, 3);
//! for k in 0..3 {
//!     lambda[(k, k)] = vals[k];
//! }
//! let recon = p * &lambda * &p.transpose();
//! assert!((&recon - &a).norm_fro() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — [`Matrix`]: heap-allocated dense matrix with
//!   runtime dimensions and flat row-major storage. Constructors and
//!   named factories (zeros, ones, identity, uniform random), element
//!   access, arithmetic operators with `checked_*` fallible variants,
//!   transpose, symmetry test, norms, and a row-per-line `Display`
//!   rendering.
//!
//! - [`linalg`] — the eigendecomposition pipeline:
//!   [`householder_tridiagonalize`] (symmetric → tridiagonal, with
//!   optional transform accumulation), [`tridiagonal_ql`]
//!   (implicit-shift QL on the tridiagonal form), and
//!   [`SymmetricEigen`] combining the two into sorted, orthonormal
//!   eigenpairs. Convenience methods on `Matrix`:
//!   [`Matrix::eig_symmetric`] and [`Matrix::eigenvalues_symmetric`].
//!
//! - [`traits`] — element traits: [`Scalar`] for storage and
//!   arithmetic, [`FloatScalar`] for anything needing `sqrt`/`abs`/
//!   epsilon (norms, symmetry tests, the eigensolver).
//!
//! ## Errors
//!
//! Shape problems surface as [`ShapeError`] (fallible constructors,
//! `checked_*` arithmetic; the plain operators panic like any indexing
//! primitive). The pipeline reports precondition violations and
//! iteration failure as [`EigenError`] — a convergence failure is
//! always propagated, never papered over with inaccurate eigenpairs.

pub mod linalg;
pub mod matrix;
pub mod traits;

pub use linalg::{
    householder_tridiagonalize, tridiagonal_ql, tridiagonal_ql_values, EigenError, QlEigen,
    SymmetricEigen, Tridiagonal,
};
pub use matrix::{Matrix, ShapeError};
pub use traits::{FloatScalar, Scalar};
