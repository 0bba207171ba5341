//! # strassen-calibration
//!
//! Measures where Strassen recursion starts paying off on this machine and
//! persists the resulting threshold as a calibration profile.

pub mod calibration;
pub mod error;
pub mod io;
pub mod microbench;
pub mod profile;
pub mod runner;

pub use calibration::{CalibrationEngine, CalibrationMode};
pub use error::CalibrationError;
pub use profile::CalibrationProfile;
