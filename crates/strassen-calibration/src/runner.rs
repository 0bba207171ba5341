//! Timing harness for calibration runs.

use std::time::{Duration, Instant};

/// Summary statistics of repeated timings.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub name: String,
    pub mean: Duration,
    pub median: Duration,
    pub min: Duration,
    pub max: Duration,
    pub iterations: u32,
}

impl BenchmarkResult {
    /// Summarise a set of samples. An empty set yields zero durations.
    #[must_use]
    pub fn from_samples(mut samples: Vec<Duration>) -> Self {
        samples.sort_unstable();
        let count = samples.len();
        let median = match count {
            0 => Duration::ZERO,
            _ if count % 2 == 1 => samples[count / 2],
            _ => (samples[count / 2 - 1] + samples[count / 2]) / 2,
        };
        let total: Duration = samples.iter().sum();
        let iterations = u32::try_from(count).unwrap_or(u32::MAX);

        Self {
            name: String::new(),
            mean: if iterations == 0 {
                Duration::ZERO
            } else {
                total / iterations
            },
            median,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            iterations,
        }
    }

    /// Attach a name to the result.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Run `f` `warmup` times untimed, then `iterations` times timed.
pub fn measure<F>(warmup: u32, iterations: u32, mut f: F) -> BenchmarkResult
where
    F: FnMut(),
{
    for _ in 0..warmup {
        f();
    }

    let samples = (0..iterations)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    BenchmarkResult::from_samples(samples)
}
