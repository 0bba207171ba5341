//! Error handling and exit codes.

use std::path::PathBuf;

use strassen_calibration::CalibrationError;
use strassen_core::constants::exit_codes;
use strassen_core::MatrixError;

/// Errors raised by the application layer itself.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The operand file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Exit code for a matrix error.
#[must_use]
pub fn handle_error(err: &MatrixError) -> i32 {
    match err {
        MatrixError::Mismatch => exit_codes::ERROR_MISMATCH,
        MatrixError::Config(_) | MatrixError::InvalidProbability(_) => exit_codes::ERROR_CONFIG,
        e if e.is_input_error() => exit_codes::ERROR_INPUT,
        _ => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any error returned by [`crate::app::run`].
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<MatrixError>() {
        return handle_error(e);
    }
    match err.downcast_ref::<CalibrationError>() {
        Some(CalibrationError::Mismatch { .. }) => return exit_codes::ERROR_MISMATCH,
        Some(CalibrationError::Matrix(e)) => return handle_error(e),
        Some(_) => return exit_codes::ERROR_GENERIC,
        None => {}
    }
    if let Some(AppError::ReadInput { .. }) = err.downcast_ref::<AppError>() {
        return exit_codes::ERROR_INPUT;
    }
    exit_codes::ERROR_GENERIC
}
