//! Engine options.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_STRASSEN_THRESHOLD;

/// Options bound to a [`StrassenEngine`](crate::strassen::StrassenEngine)
/// at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Largest side length multiplied directly instead of recursing.
    pub threshold: usize,
    /// Side length at or above which the seven sub-products run on the
    /// rayon pool. `None` keeps the engine single-threaded.
    #[serde(default)]
    pub parallel_threshold: Option<usize>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_STRASSEN_THRESHOLD,
            parallel_threshold: None,
        }
    }
}

impl EngineOptions {
    /// Replace the recursion threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Enable parallel sub-products for sides of at least `threshold`.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = Some(threshold);
        self
    }

    /// Whether a recursion level of side `n` fans out to the pool.
    #[must_use]
    pub fn should_parallelize(&self, n: usize) -> bool {
        self.parallel_threshold.is_some_and(|t| n >= t)
    }
}
