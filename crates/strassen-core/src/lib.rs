//! # strassen-core
//!
//! Strassen matrix multiplication over exact integers for square matrices of
//! any size. Odd dimensions are padded virtually through [`SubmatrixView`]
//! and small subproblems fall back to direct multiplication.

pub mod compare;
pub mod constants;
pub mod error;
pub mod graph;
pub mod input;
pub mod matrix;
pub mod multiplier;
pub mod options;
pub mod random;
pub mod registry;
pub mod scalar;
pub mod strassen;
pub mod view;

// Re-exports
pub use constants::{exit_codes, DEFAULT_SEED, DEFAULT_STRASSEN_THRESHOLD};
pub use error::MatrixError;
pub use matrix::Matrix;
pub use multiplier::{DirectMultiplier, MatrixMultiplier, StrassenMultiplier};
pub use options::EngineOptions;
pub use registry::{DefaultFactory, MultiplierFactory};
pub use scalar::Scalar;
pub use strassen::StrassenEngine;
pub use view::{Combination, Quadrant, SubmatrixView};

/// Multiply two square matrices with the default threshold.
///
/// For a custom threshold or parallel evaluation build a
/// [`StrassenEngine`] from [`EngineOptions`].
///
/// # Example
/// ```
/// use strassen_core::Matrix;
///
/// let a = Matrix::<i64>::from_i64_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::<i64>::from_i64_rows(&[vec![5, 6], vec![7, 8]]).unwrap();
/// let c = strassen_core::multiply(&a, &b).unwrap();
/// assert_eq!(c.row(1), &[43, 50]);
/// ```
pub fn multiply<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    StrassenEngine::default().multiply_matrices(a, b)
}
