//! Constants for the Strassen engine and its collaborators.

/// Default side length at or below which the engine multiplies directly.
///
/// Found empirically for 32/64-bit scalars; the calibration harness
/// refines it per machine.
pub const DEFAULT_STRASSEN_THRESHOLD: usize = 68;

/// Default seed for reproducible random operands and graphs.
pub const DEFAULT_SEED: u64 = 909_089_732;

/// Inclusive lower bound for random matrix entries.
pub const RANDOM_ENTRY_MIN: i64 = -50;

/// Exclusive upper bound for random matrix entries.
pub const RANDOM_ENTRY_MAX: i64 = 50;

/// Largest side length swept by a full calibration run (exclusive).
pub const CALIBRATION_MAX_SIZE: usize = 150;

/// Exit codes for the `strassen` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Multipliers disagreed during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Malformed or incomplete input data.
    pub const ERROR_INPUT: i32 = 5;
}
