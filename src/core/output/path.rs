//! Deterministic artifact path construction
//!
//! Artifacts land in `<base>/<project>/<stamp>_<survey>_<type>.<ext>` where
//! the stamp is the calendar date, extended with HHMMSS in timestamped mode.
//! Two calls with identical inputs (including the instant) yield the same
//! path; same-day collisions overwrite the earlier file. Last-write-wins is
//! the intended semantics, not an oversight.

use crate::domain::{Result, SurveyorError};
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

/// Builds the output path for an artifact
///
/// The project subfolder is created (single level) if absent. The base
/// directory itself must already exist.
///
/// # Errors
///
/// Returns `SurveyorError::Configuration` if `base_dir` does not exist or is
/// not a directory, before any filesystem mutation.
pub fn artifact_path(
    base_dir: &Path,
    project: &str,
    survey_name: &str,
    artifact_type: &str,
    extension: &str,
    timestamped: bool,
    now: NaiveDateTime,
) -> Result<PathBuf> {
    if !base_dir.is_dir() {
        return Err(SurveyorError::Configuration(format!(
            "Output directory {} does not exist or is not a directory",
            base_dir.display()
        )));
    }

    let subfolder = base_dir.join(project);
    if !subfolder.exists() {
        fs::create_dir(&subfolder).map_err(|e| {
            SurveyorError::Io(format!(
                "Failed to create project folder {}: {}",
                subfolder.display(),
                e
            ))
        })?;
    }

    let stamp = if timestamped {
        now.format("%Y%m%d_%H%M%S").to_string()
    } else {
        now.format("%Y%m%d").to_string()
    };

    Ok(subfolder.join(format!("{stamp}_{survey_name}_{artifact_type}.{extension}")))
}
