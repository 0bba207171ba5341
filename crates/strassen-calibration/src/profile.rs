//! Calibration profile (serializable).

use serde::{Deserialize, Serialize};

use strassen_core::constants::{CALIBRATION_MAX_SIZE, DEFAULT_STRASSEN_THRESHOLD};
use strassen_core::EngineOptions;

/// Current profile format version.
pub const PROFILE_VERSION: u32 = 1;

/// Thresholds measured on one machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationProfile {
    /// Profile format version for compatibility checking.
    pub version: u32,
    /// Largest side length multiplied directly.
    pub strassen_threshold: usize,
    /// Side length at which parallel evaluation started paying off, if any.
    #[serde(default)]
    pub parallel_threshold: Option<usize>,
    /// CPU model used for calibration.
    pub cpu_model: String,
    /// Number of CPU cores.
    pub num_cores: usize,
    /// CPU fingerprint for invalidation.
    pub cpu_fingerprint: String,
    /// Calibration timestamp.
    pub timestamp: String,
}

impl Default for CalibrationProfile {
    fn default() -> Self {
        Self {
            version: PROFILE_VERSION,
            strassen_threshold: DEFAULT_STRASSEN_THRESHOLD,
            parallel_threshold: None,
            cpu_model: String::new(),
            num_cores: num_cpus(),
            cpu_fingerprint: String::new(),
            timestamp: String::new(),
        }
    }
}

impl CalibrationProfile {
    /// Profile for the current machine with the given thresholds.
    #[must_use]
    pub fn measured(strassen_threshold: usize, parallel_threshold: Option<usize>) -> Self {
        Self {
            version: PROFILE_VERSION,
            strassen_threshold,
            parallel_threshold,
            cpu_model: cpu_model(),
            num_cores: num_cpus(),
            cpu_fingerprint: cpu_fingerprint(),
            timestamp: current_timestamp(),
        }
    }

    /// Check if this profile is compatible with the current version.
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.version == PROFILE_VERSION
    }

    /// Check if this profile matches the current CPU.
    #[must_use]
    pub fn matches_cpu(&self, current_fingerprint: &str) -> bool {
        if self.cpu_fingerprint.is_empty() || current_fingerprint.is_empty() {
            return true;
        }
        self.cpu_fingerprint == current_fingerprint
    }

    /// Thresholds are within the calibrated range.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (1..=CALIBRATION_MAX_SIZE).contains(&self.strassen_threshold)
            && self.parallel_threshold.map_or(true, |t| t > self.strassen_threshold)
    }

    /// Engine options carrying this profile's thresholds.
    #[must_use]
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            threshold: self.strassen_threshold,
            parallel_threshold: self.parallel_threshold,
        }
    }
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(4)
}

/// CPU fingerprint built from the model name and core count.
#[must_use]
pub fn cpu_fingerprint() -> String {
    format!("{}|cores={}", cpu_model(), num_cpus())
}

/// Get the current CPU model string.
#[must_use]
pub fn cpu_model() -> String {
    use sysinfo::System;
    let sys = System::new_all();
    sys.cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .unwrap_or_default()
}

/// Seconds since the Unix epoch, prefixed with `unix:`.
#[must_use]
pub fn current_timestamp() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format!("unix:{}", dur.as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_serialization() {
        let profile = CalibrationProfile {
            parallel_threshold: Some(256),
            ..CalibrationProfile::default()
        };
        let json = serde_json::to_string_pretty(&profile).unwrap();
        let deserialized: CalibrationProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, profile);
    }

    #[test]
    fn profile_without_parallel_field() {
        let json = r#"{"version":1,"strassen_threshold":40,"cpu_model":"x","num_cores":2,"cpu_fingerprint":"","timestamp":""}"#;
        let profile: CalibrationProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.strassen_threshold, 40);
        assert_eq!(profile.parallel_threshold, None);
    }

    #[test]
    fn profile_compatibility() {
        assert!(CalibrationProfile::default().is_compatible());
        let old = CalibrationProfile {
            version: 0,
            ..CalibrationProfile::default()
        };
        assert!(!old.is_compatible());
    }

    #[test]
    fn profile_cpu_match() {
        let mut profile = CalibrationProfile {
            cpu_fingerprint: "cpu|cores=8".to_string(),
            ..CalibrationProfile::default()
        };
        assert!(profile.matches_cpu("cpu|cores=8"));
        assert!(!profile.matches_cpu("cpu|cores=4"));
        profile.cpu_fingerprint = String::new();
        assert!(profile.matches_cpu("cpu|cores=8"));
    }

    #[test]
    fn profile_validation() {
        assert!(CalibrationProfile::default().is_valid());

        let zero = CalibrationProfile {
            strassen_threshold: 0,
            ..CalibrationProfile::default()
        };
        assert!(!zero.is_valid());

        let parallel_below = CalibrationProfile {
            parallel_threshold: Some(10),
            ..CalibrationProfile::default()
        };
        assert!(!parallel_below.is_valid());
    }

    #[test]
    fn engine_options_from_profile() {
        let profile = CalibrationProfile::measured(33, Some(200));
        let options = profile.engine_options();
        assert_eq!(options.threshold, 33);
        assert_eq!(options.parallel_threshold, Some(200));
        assert!(profile.timestamp.starts_with("unix:"));
        assert!(profile.cpu_fingerprint.contains("cores="));
    }
}
