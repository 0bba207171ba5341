//! Micro-benchmarks comparing direct multiplication with one Strassen level.

use rand::Rng;

use strassen_core::random::{random_matrix, seeded_rng};
use strassen_core::{
    DirectMultiplier, EngineOptions, Matrix, MatrixMultiplier, StrassenEngine,
};

use crate::error::CalibrationError;
use crate::runner::{measure, BenchmarkResult};

const WARMUP_ITERS: u32 = 1;
const MEASURE_ITERS: u32 = 5;

/// Timing of direct vs one-level Strassen at one size.
#[derive(Debug, Clone)]
pub struct CrossoverPoint {
    pub size: usize,
    pub direct_ns: u64,
    pub strassen_ns: u64,
    pub strassen_is_faster: bool,
}

/// Timing of sequential vs parallel Strassen at one size.
#[derive(Debug, Clone)]
pub struct ParallelSpeedup {
    pub size: usize,
    pub sequential_ns: u64,
    pub parallel_ns: u64,
    pub speedup: f64,
}

/// Engine that splits an `n x n` problem once and multiplies the seven
/// halves directly.
#[must_use]
pub fn one_level_engine(n: usize) -> StrassenEngine {
    StrassenEngine::with_threshold(n.saturating_sub(1))
}

/// Multiply `trials` random `n x n` pairs both ways and require equal
/// products.
pub fn verify_one_level<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    trials: usize,
) -> Result<(), CalibrationError> {
    let engine = one_level_engine(n);
    for trial in 0..trials {
        let a: Matrix<i64> = random_matrix(rng, n);
        let b: Matrix<i64> = random_matrix(rng, n);
        let direct = DirectMultiplier.multiply(&a, &b)?;
        let strassen = engine.multiply_matrices(&a, &b)?;
        if direct != strassen {
            return Err(CalibrationError::Mismatch { size: n, trial });
        }
    }
    Ok(())
}

/// Time direct and one-level Strassen multiplication of random `n x n`
/// operands, checking that both agree.
#[allow(clippy::cast_possible_truncation)]
pub fn compare_at_size(n: usize, seed: u64) -> Result<CrossoverPoint, CalibrationError> {
    let mut rng = seeded_rng(seed ^ n as u64);
    let a: Matrix<i64> = random_matrix(&mut rng, n);
    let b: Matrix<i64> = random_matrix(&mut rng, n);
    let engine = one_level_engine(n);

    if DirectMultiplier.multiply(&a, &b)? != engine.multiply_matrices(&a, &b)? {
        return Err(CalibrationError::Mismatch { size: n, trial: 0 });
    }

    let direct = timed(&format!("direct_{n}"), || {
        std::hint::black_box(DirectMultiplier.multiply(&a, &b).ok());
    });
    let strassen = timed(&format!("strassen_{n}"), || {
        std::hint::black_box(engine.multiply_matrices(&a, &b).ok());
    });
    tracing::trace!(
        n,
        direct = ?direct.median,
        strassen = ?strassen.median,
        "crossover sample"
    );

    Ok(CrossoverPoint {
        size: n,
        direct_ns: direct.median.as_nanos() as u64,
        strassen_ns: strassen.median.as_nanos() as u64,
        strassen_is_faster: strassen.median < direct.median,
    })
}

/// Run [`compare_at_size`] for every size, in order.
pub fn find_crossover(sizes: &[usize], seed: u64) -> Result<Vec<CrossoverPoint>, CalibrationError> {
    sizes.iter().map(|&n| compare_at_size(n, seed)).collect()
}

/// Compare sequential and rayon-parallel Strassen at size `n` with the
/// given recursion threshold.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn measure_parallel_speedup(n: usize, threshold: usize, seed: u64) -> ParallelSpeedup {
    let mut rng = seeded_rng(seed ^ n as u64);
    let a: Matrix<i64> = random_matrix(&mut rng, n);
    let b: Matrix<i64> = random_matrix(&mut rng, n);

    let options = EngineOptions::default().with_threshold(threshold);
    let sequential_engine = StrassenEngine::new(options);
    let parallel_engine = StrassenEngine::new(options.with_parallel_threshold(n));

    let sequential = timed("sequential", || {
        std::hint::black_box(sequential_engine.multiply_matrices(&a, &b).ok());
    });
    let parallel = timed("parallel", || {
        std::hint::black_box(parallel_engine.multiply_matrices(&a, &b).ok());
    });

    let sequential_ns = sequential.median.as_nanos() as u64;
    let parallel_ns = parallel.median.as_nanos() as u64;
    ParallelSpeedup {
        size: n,
        sequential_ns,
        parallel_ns,
        speedup: if parallel_ns > 0 {
            sequential_ns as f64 / parallel_ns as f64
        } else {
            1.0
        },
    }
}

fn timed<F: FnMut()>(name: &str, f: F) -> BenchmarkResult {
    measure(WARMUP_ITERS, MEASURE_ITERS, f).with_name(name)
}
