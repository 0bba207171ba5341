//! Multiplier trait and its direct and Strassen implementations.
//!
//! `MatrixMultiplier` is the interface consumed by the driver, the
//! calibration harness and cross-validation.

use crate::error::MatrixError;
use crate::matrix::{square_operands, Matrix};
use crate::options::EngineOptions;
use crate::scalar::Scalar;
use crate::strassen::StrassenEngine;
use crate::view::SubmatrixView;

/// Multiplies two square matrices of equal size.
pub trait MatrixMultiplier<T: Scalar>: Send + Sync {
    /// Compute `a * b`.
    fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError>;

    /// Get the name of this multiplier.
    fn name(&self) -> &str;
}

/// Textbook triple-loop multiplication.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectMultiplier;

impl DirectMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<T: Scalar> MatrixMultiplier<T> for DirectMultiplier {
    fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        square_operands(a, b)?;
        Ok(SubmatrixView::full(a).multiply_direct(&SubmatrixView::full(b)))
    }

    fn name(&self) -> &'static str {
        "Direct"
    }
}

/// Strassen multiplication through a [`StrassenEngine`].
#[derive(Debug, Clone, Default)]
pub struct StrassenMultiplier {
    engine: StrassenEngine,
}

impl StrassenMultiplier {
    #[must_use]
    pub fn new(options: EngineOptions) -> Self {
        Self {
            engine: StrassenEngine::new(options),
        }
    }

    /// The engine doing the work.
    #[must_use]
    pub fn engine(&self) -> &StrassenEngine {
        &self.engine
    }
}

impl<T: Scalar> MatrixMultiplier<T> for StrassenMultiplier {
    fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.engine.multiply_matrices(a, b)
    }

    fn name(&self) -> &'static str {
        "Strassen"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Matrix<i64>, Matrix<i64>) {
        (
            Matrix::from_i64_rows(&[vec![1, 2], vec![3, 4]]).unwrap(),
            Matrix::from_i64_rows(&[vec![5, 6], vec![7, 8]]).unwrap(),
        )
    }

    #[test]
    fn direct_fixture() {
        let (a, b) = fixture();
        let product = DirectMultiplier::new().multiply(&a, &b).unwrap();
        assert_eq!(
            product,
            Matrix::from_i64_rows(&[vec![19, 22], vec![43, 50]]).unwrap()
        );
    }

    #[test]
    fn strassen_agrees_with_direct() {
        let (a, b) = fixture();
        let strassen = StrassenMultiplier::new(EngineOptions::default().with_threshold(0));
        assert_eq!(
            strassen.multiply(&a, &b).unwrap(),
            DirectMultiplier::new().multiply(&a, &b).unwrap()
        );
        assert_eq!(strassen.engine().threshold(), 0);
    }

    #[test]
    fn names() {
        assert_eq!(MatrixMultiplier::<i64>::name(&DirectMultiplier::new()), "Direct");
        assert_eq!(
            MatrixMultiplier::<i64>::name(&StrassenMultiplier::default()),
            "Strassen"
        );
    }

    #[test]
    fn direct_rejects_mismatch() {
        let a = Matrix::<i64>::identity(2);
        let b = Matrix::<i64>::identity(3);
        assert_eq!(
            DirectMultiplier::new().multiply(&a, &b),
            Err(MatrixError::DimensionMismatch { left: 2, right: 3 })
        );
    }
}
