//! Running several multipliers over the same operands and cross-checking them.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::multiplier::MatrixMultiplier;
use crate::scalar::Scalar;

/// Outcome of one multiplier run.
#[derive(Debug)]
pub struct MultiplicationResult<T> {
    /// Name of the multiplier that produced this result.
    pub multiplier: String,
    /// The product, or the error the multiplier reported.
    pub outcome: Result<Matrix<T>, MatrixError>,
    /// Wall-clock time of the run.
    pub duration: Duration,
}

fn run_one<T: Scalar>(
    multiplier: &dyn MatrixMultiplier<T>,
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> MultiplicationResult<T> {
    let start = Instant::now();
    let outcome = multiplier.multiply(a, b);
    MultiplicationResult {
        multiplier: multiplier.name().to_string(),
        outcome,
        duration: start.elapsed(),
    }
}

/// Multiply `a * b` with every given multiplier.
///
/// A single multiplier runs on the calling thread; several run on the rayon
/// pool. Results keep the order of `multipliers`.
pub fn execute_multiplications<T: Scalar>(
    multipliers: &[Arc<dyn MatrixMultiplier<T>>],
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Vec<MultiplicationResult<T>> {
    if let [single] = multipliers {
        return vec![run_one(single.as_ref(), a, b)];
    }

    use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

    multipliers
        .par_iter()
        .map(|multiplier| run_one(multiplier.as_ref(), a, b))
        .collect()
}

/// Check that every successful result equals the first one.
pub fn analyze_comparison_results<T: Scalar>(
    results: &[MultiplicationResult<T>],
) -> Result<(), MatrixError> {
    let mut products = results.iter().filter_map(|r| r.outcome.as_ref().ok());

    let Some(first) = products.next() else {
        return Err(MatrixError::Calculation("no valid results".into()));
    };

    if products.any(|product| product != first) {
        return Err(MatrixError::Mismatch);
    }
    Ok(())
}
