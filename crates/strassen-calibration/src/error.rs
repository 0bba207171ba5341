//! Calibration errors.

/// Error raised while calibrating or persisting a profile.
#[derive(Debug, thiserror::Error)]
pub enum CalibrationError {
    /// Direct and one-level Strassen products differed.
    #[error("strassen and direct products differ at n={size} (trial {trial})")]
    Mismatch { size: usize, trial: usize },

    /// The engine rejected the generated operands.
    #[error(transparent)]
    Matrix(#[from] strassen_core::MatrixError),

    /// Reading or writing the profile failed.
    #[error("profile I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The profile could not be encoded.
    #[error("profile serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
