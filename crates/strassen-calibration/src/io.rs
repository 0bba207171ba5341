//! Profile persistence (load/save).

use std::path::{Path, PathBuf};

use crate::error::CalibrationError;
use crate::profile::{self, CalibrationProfile};

const PROFILE_FILENAME: &str = "strassen_calibration.json";
const CONFIG_DIR_NAME: &str = "strassen";

/// Load the calibration profile from the standard location.
/// Tries the XDG config dir first, then the working directory.
#[must_use]
pub fn load_profile() -> Option<CalibrationProfile> {
    if let Some(path) = xdg_profile_path() {
        if let Some(p) = load_from_path(&path) {
            return Some(p);
        }
    }
    load_from_path(&cwd_profile_path())
}

/// Check a loaded profile against the current version, the threshold
/// bounds and the CPU. Returns `None` when it must not be used.
#[must_use]
pub fn validate_profile(p: CalibrationProfile) -> Option<CalibrationProfile> {
    if !p.is_compatible() {
        tracing::info!(version = p.version, "Profile version mismatch, ignoring cached profile");
        return None;
    }
    if !p.is_valid() {
        tracing::info!(
            threshold = p.strassen_threshold,
            "Profile has invalid thresholds, ignoring cached profile"
        );
        return None;
    }
    if !p.matches_cpu(&profile::cpu_fingerprint()) {
        tracing::info!(cpu = %p.cpu_model, "Profile CPU mismatch, ignoring cached profile");
        return None;
    }
    Some(p)
}

/// Save the profile to the XDG config directory, or the working directory
/// when no config directory is known. Returns the path written.
pub fn save_profile(p: &CalibrationProfile) -> Result<PathBuf, CalibrationError> {
    let path = if let Some(xdg_path) = xdg_profile_path() {
        if let Some(parent) = xdg_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        xdg_path
    } else {
        cwd_profile_path()
    };

    save_to_path(p, &path)?;
    Ok(path)
}

/// Save a profile to a specific path.
pub fn save_to_path(p: &CalibrationProfile, path: &Path) -> Result<(), CalibrationError> {
    let content = serde_json::to_string_pretty(p)?;
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), "saved calibration profile");
    Ok(())
}

/// Load a profile from a specific path. Missing or malformed files yield `None`.
#[must_use]
pub fn load_from_path(path: &Path) -> Option<CalibrationProfile> {
    let content = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(p) => Some(p),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring malformed calibration profile");
            None
        }
    }
}

/// Delete the saved profile if it exists.
pub fn delete_profile() -> Result<bool, CalibrationError> {
    for path in xdg_profile_path().into_iter().chain([cwd_profile_path()]) {
        if path.exists() {
            std::fs::remove_file(&path)?;
            return Ok(true);
        }
    }
    Ok(false)
}

/// Path of the profile in the XDG config directory.
#[must_use]
pub fn xdg_profile_path() -> Option<PathBuf> {
    let config_dir = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;

    Some(config_dir.join(CONFIG_DIR_NAME).join(PROFILE_FILENAME))
}

fn cwd_profile_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(format!(".{PROFILE_FILENAME}"))
}
