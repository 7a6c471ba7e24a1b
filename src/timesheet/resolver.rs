//! Locating the timesheet file for a command.

use crate::errors::{AppResult, ProjectClockError};
use crate::timesheet::TIMESHEET_SUFFIX;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve the timesheet path relative to the process working directory.
pub fn resolve(explicit: Option<&Path>) -> AppResult<PathBuf> {
    let cwd = std::env::current_dir()?;
    resolve_in(&cwd, explicit)
}

/// Resolve the timesheet path against `dir`.
///
/// - explicit path: made absolute against `dir`, must exist;
/// - no path: `dir` (not recursively) must hold exactly one `*.pclock.json`.
///
/// An unreadable `dir` is an I/O error, not a missing timesheet.
pub fn resolve_in(dir: &Path, explicit: Option<&Path>) -> AppResult<PathBuf> {
    if let Some(p) = explicit {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            dir.join(p)
        };
        if !path.is_file() {
            return Err(ProjectClockError::file_missing(&path).into());
        }
        debug!(path = %path.display(), "using explicit timesheet");
        return Ok(path);
    }

    let mut found = find_timesheets(dir)?;
    match found.len() {
        0 => Err(ProjectClockError::no_timesheet().into()),
        1 => {
            let path = found.remove(0);
            debug!(path = %path.display(), "discovered timesheet");
            Ok(path)
        }
        n => {
            debug!(count = n, dir = %dir.display(), "ambiguous timesheet lookup");
            Err(ProjectClockError::ambiguous_timesheet().into())
        }
    }
}

/// True when the file name follows the `<project>.pclock.json` convention.
pub fn is_timesheet_name(name: &str) -> bool {
    name.ends_with(TIMESHEET_SUFFIX)
}

/// Regular files, or symlinks to them, named `*.pclock.json`.
fn find_timesheets(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut found: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| is_timesheet_name(&e.file_name().to_string_lossy()))
        .map(|e| e.path())
        .filter(|p| fs::metadata(p).map(|m| m.is_file()).unwrap_or(false))
        .collect();
    found.sort();
    Ok(found)
}
