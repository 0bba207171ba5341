//! Seeded random operands and graphs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{RANDOM_ENTRY_MAX, RANDOM_ENTRY_MIN};
use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::scalar::Scalar;

/// Deterministic generator for reproducible experiments.
#[must_use]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `n x n` matrix with entries uniform in `[RANDOM_ENTRY_MIN, RANDOM_ENTRY_MAX)`.
pub fn random_matrix<T: Scalar, R: Rng + ?Sized>(rng: &mut R, n: usize) -> Matrix<T> {
    let mut matrix = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            *matrix.at_mut(i, j) = T::from_i64(rng.gen_range(RANDOM_ENTRY_MIN..RANDOM_ENTRY_MAX));
        }
    }
    matrix
}

/// Adjacency matrix of an Erdős–Rényi graph on `n` vertices.
///
/// Each unordered pair is joined independently with probability `p`. The
/// matrix is symmetric with a zero diagonal.
pub fn random_graph<T: Scalar, R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    p: f64,
) -> Result<Matrix<T>, MatrixError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(MatrixError::InvalidProbability(p));
    }
    let mut adjacency = Matrix::zeros(n, n);
    for i in 0..n {
        for j in i + 1..n {
            if rng.gen_bool(p) {
                *adjacency.at_mut(i, j) = T::one();
                *adjacency.at_mut(j, i) = T::one();
            }
        }
    }
    Ok(adjacency)
}
