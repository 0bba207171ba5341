//! Calibration engine.

use strassen_core::constants::{CALIBRATION_MAX_SIZE, DEFAULT_SEED};

use crate::error::CalibrationError;
use crate::microbench::{self, CrossoverPoint};
use crate::profile::CalibrationProfile;

/// Sizes tried when looking for a parallel speedup.
const PARALLEL_TEST_SIZES: [usize; 3] = [128, 256, 512];

/// Minimum speedup that counts as parallel evaluation paying off.
const PARALLEL_MIN_SPEEDUP: f64 = 1.2;

/// Mode of calibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationMode {
    /// Every size from 2 up to the calibration limit, plus the parallel probe.
    Full,
    /// A coarse sweep of sizes.
    Auto,
    /// Load the saved profile, falling back to defaults.
    Cached,
}

/// Progress callback for calibration.
pub type ProgressCallback = Box<dyn Fn(CalibrationProgress) + Send>;

/// Progress information during calibration.
#[derive(Debug, Clone)]
pub struct CalibrationProgress {
    /// Current step name.
    pub step: String,
    /// Current step number (1-based).
    pub current: usize,
    /// Total number of steps.
    pub total: usize,
}

/// Determines the Strassen threshold for this machine.
pub struct CalibrationEngine {
    mode: CalibrationMode,
    seed: u64,
    max_size: usize,
    parallel_sizes: Vec<usize>,
    progress_cb: Option<ProgressCallback>,
}

impl CalibrationEngine {
    /// Create a new calibration engine.
    #[must_use]
    pub fn new(mode: CalibrationMode) -> Self {
        Self {
            mode,
            seed: DEFAULT_SEED,
            max_size: CALIBRATION_MAX_SIZE,
            parallel_sizes: PARALLEL_TEST_SIZES.to_vec(),
            progress_cb: None,
        }
    }

    /// Seed for the random operands.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Largest size measured. Clamped to `3..=CALIBRATION_MAX_SIZE`, the
    /// range a saved profile's threshold must fall in.
    #[must_use]
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size.clamp(3, CALIBRATION_MAX_SIZE);
        self
    }

    /// Sizes probed for a parallel speedup in full mode, smallest first.
    #[must_use]
    pub fn with_parallel_sizes(mut self, sizes: &[usize]) -> Self {
        self.parallel_sizes = sizes.to_vec();
        self
    }

    /// Set a progress callback.
    #[must_use]
    pub fn with_progress(mut self, cb: ProgressCallback) -> Self {
        self.progress_cb = Some(cb);
        self
    }

    /// Run calibration and produce a profile.
    pub fn calibrate(&self) -> Result<CalibrationProfile, CalibrationError> {
        match self.mode {
            CalibrationMode::Full => self.full_calibration(),
            CalibrationMode::Auto => self.auto_calibration(),
            CalibrationMode::Cached => Ok(self.load_cached()),
        }
    }

    fn report_progress(&self, step: &str, current: usize, total: usize) {
        if let Some(cb) = &self.progress_cb {
            cb(CalibrationProgress {
                step: step.to_string(),
                current,
                total,
            });
        }
    }

    fn full_calibration(&self) -> Result<CalibrationProfile, CalibrationError> {
        let total_steps = 3;

        self.report_progress("Verifying one-level Strassen", 1, total_steps);
        let mut rng = strassen_core::random::seeded_rng(self.seed);
        for n in 2..=self.max_size {
            microbench::verify_one_level(&mut rng, n, 3)?;
        }

        self.report_progress("Timing direct vs Strassen", 2, total_steps);
        let sizes: Vec<usize> = (2..=self.max_size).collect();
        let points = microbench::find_crossover(&sizes, self.seed)?;
        let strassen_threshold = select_threshold(&points, self.max_size);

        self.report_progress("Measuring parallel speedup", 3, total_steps);
        let parallel_threshold = self
            .parallel_sizes
            .iter()
            .copied()
            .filter(|&n| n > strassen_threshold)
            .find(|&n| {
                microbench::measure_parallel_speedup(n, strassen_threshold, self.seed).speedup
                    >= PARALLEL_MIN_SPEEDUP
            });

        tracing::info!(strassen_threshold, ?parallel_threshold, "full calibration finished");
        Ok(CalibrationProfile::measured(strassen_threshold, parallel_threshold))
    }

    fn auto_calibration(&self) -> Result<CalibrationProfile, CalibrationError> {
        let total_steps = 2;

        self.report_progress("Running coarse crossover sweep", 1, total_steps);
        let sizes: Vec<usize> = (1..)
            .map(|step| step * 8)
            .take_while(|&n| n <= self.max_size)
            .collect();
        let points = microbench::find_crossover(&sizes, self.seed)?;

        self.report_progress("Building profile", 2, total_steps);
        let strassen_threshold = select_threshold(&points, self.max_size);
        tracing::info!(strassen_threshold, "auto calibration finished");
        Ok(CalibrationProfile::measured(strassen_threshold, None))
    }

    #[allow(clippy::unused_self)]
    fn load_cached(&self) -> CalibrationProfile {
        crate::io::load_profile()
            .and_then(crate::io::validate_profile)
            .unwrap_or_default()
    }
}

/// Pick the threshold from crossover points sorted by size.
///
/// The threshold is one below the first size where Strassen wins at that
/// size and the next measured one. Without such a pair Strassen never pays
/// off within the sweep and `max_size` is returned.
#[must_use]
pub fn select_threshold(points: &[CrossoverPoint], max_size: usize) -> usize {
    points
        .windows(2)
        .find(|pair| pair[0].strassen_is_faster && pair[1].strassen_is_faster)
        .map_or(max_size, |pair| pair[0].size - 1)
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(size: usize, strassen_is_faster: bool) -> CrossoverPoint {
        CrossoverPoint {
            size,
            direct_ns: 100,
            strassen_ns: if strassen_is_faster { 50 } else { 150 },
            strassen_is_faster,
        }
    }

    #[test]
    fn select_needs_two_consecutive_wins() {
        let points = vec![
            point(10, false),
            point(11, true),
            point(12, false),
            point(13, true),
            point(14, true),
        ];
        assert_eq!(select_threshold(&points, 150), 12);
    }

    #[test]
    fn select_without_crossover() {
        let points = vec![point(10, false), point(11, true)];
        assert_eq!(select_threshold(&points, 150), 150);
        assert_eq!(select_threshold(&[], 40), 40);
    }

    #[test]
    fn select_never_returns_zero() {
        let points = vec![point(1, true), point(2, true)];
        assert_eq!(select_threshold(&points, 150), 1);
    }

    #[test]
    fn max_size_stays_within_profile_bounds() {
        let engine = CalibrationEngine::new(CalibrationMode::Auto).with_max_size(10_000);
        assert_eq!(engine.max_size, CALIBRATION_MAX_SIZE);
        assert_eq!(CalibrationEngine::new(CalibrationMode::Auto).with_max_size(0).max_size, 3);

        let points: Vec<CrossoverPoint> = (2..=engine.max_size).map(|n| point(n, false)).collect();
        let threshold = select_threshold(&points, engine.max_size);
        assert!(CalibrationProfile::measured(threshold, None).is_valid());
    }

    #[test]
    fn auto_calibration_returns_valid() {
        let engine = CalibrationEngine::new(CalibrationMode::Auto).with_max_size(32);
        let profile = engine.calibrate().unwrap();
        assert!((1..=32).contains(&profile.strassen_threshold));
        assert!(profile.is_valid());
    }

    #[test]
    fn full_calibration_returns_valid() {
        let engine = CalibrationEngine::new(CalibrationMode::Full)
            .with_max_size(12)
            .with_parallel_sizes(&[24, 48]);
        let profile = engine.calibrate().unwrap();
        assert!((1..=12).contains(&profile.strassen_threshold));
        assert!(profile.is_valid());
        assert!(!profile.cpu_fingerprint.is_empty());
        assert!(!profile.timestamp.is_empty());
    }

    #[test]
    fn cached_mode_returns_valid() {
        let profile = CalibrationEngine::new(CalibrationMode::Cached)
            .calibrate()
            .unwrap();
        assert!(profile.is_valid());
    }

    #[test]
    fn progress_callback() {
        use std::sync::{Arc, Mutex};

        let steps = Arc::new(Mutex::new(Vec::new()));
        let steps_clone = Arc::clone(&steps);

        let engine = CalibrationEngine::new(CalibrationMode::Auto)
            .with_max_size(16)
            .with_progress(Box::new(move |progress| {
                steps_clone.lock().unwrap().push(progress.step.clone());
            }));

        let _profile = engine.calibrate().unwrap();

        let recorded = steps.lock().unwrap();
        assert_eq!(recorded.len(), 2);
        assert!(recorded[0].contains("crossover"));
    }
}
