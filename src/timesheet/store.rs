//! Reading and writing timesheet files.
//!
//! Every mutating command loads the whole document, changes it in memory and
//! writes it back in full. Writes go through a sibling temp file and a
//! rename, so a reader never sees a half-written timesheet.

use crate::errors::{AppResult, ProjectClockError};
use crate::models::TimesheetDocument;
use crate::timesheet::resolver;
use crate::timesheet::validator::validate;
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve, check permissions, parse and validate.
pub fn load(explicit: Option<&Path>) -> AppResult<(PathBuf, TimesheetDocument)> {
    let path = resolver::resolve(explicit)?;
    let doc = load_from(&path)?;
    Ok((path, doc))
}

/// Load an already resolved timesheet path.
///
/// Write access is required up front: a load is always followed by a save
/// in the same command.
pub fn load_from(path: &Path) -> AppResult<TimesheetDocument> {
    check_readable(path)?;
    check_writable(path)?;

    let content = fs::read(path)?;
    let doc = parse(path, &content)?;
    debug!(path = %path.display(), tasks = doc.tasks.len(), "timesheet loaded");
    Ok(doc)
}

/// Parse bytes as JSON and validate it as a timesheet.
///
/// Bytes that are not UTF-8 are malformed JSON like any other syntax error.
pub fn parse(path: &Path, content: &[u8]) -> Result<TimesheetDocument, ProjectClockError> {
    let raw: serde_json::Value =
        serde_json::from_slice(content).map_err(|e| ProjectClockError::InvalidJson {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate(raw)
}

/// Overwrite an existing timesheet. Never creates a new file.
pub fn save(doc: &TimesheetDocument, explicit: Option<&Path>) -> AppResult<PathBuf> {
    let path = resolver::resolve(explicit)?;
    save_to(doc, &path)?;
    Ok(path)
}

/// Atomically replace the content of `path`, which must already exist.
///
/// A symlink is followed: the file it points to gets replaced, the link stays.
pub fn save_to(doc: &TimesheetDocument, path: &Path) -> AppResult<()> {
    if !path.is_file() {
        return Err(ProjectClockError::file_missing(path).into());
    }
    let path = &fs::canonicalize(path)?;
    let json = to_json(doc)?;

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let temp_path = dir.join(format!(".{}.tmp.{}", file_name, std::process::id()));

    let written = write_temp(&temp_path, &json, path).and_then(|_| fs::rename(&temp_path, path));
    if let Err(e) = written {
        fs::remove_file(&temp_path).ok();
        return Err(e.into());
    }

    debug!(path = %path.display(), bytes = json.len(), "timesheet saved");
    Ok(())
}

/// Create `<dir>/<project_name>.pclock.json` holding an empty timesheet.
///
/// Fails with [`ProjectClockError::AlreadyExists`] rather than overwrite.
pub fn create_new(dir: &Path, project_name: &str) -> AppResult<PathBuf> {
    let name = project_name.trim();
    if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(ProjectClockError::InvalidProjectName(project_name.to_string()).into());
    }

    let path = dir.join(format!("{}{}", name, crate::timesheet::TIMESHEET_SUFFIX));
    let doc = TimesheetDocument::new(name);
    let json = to_json(&doc)?;

    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(ProjectClockError::AlreadyExists(path).into());
        }
        Err(e) => return Err(e.into()),
    };
    file.write_all(json.as_bytes())?;
    file.sync_all()?;

    debug!(path = %path.display(), "timesheet created");
    Ok(path)
}

/// Two-space indented JSON with a trailing newline.
pub fn to_json(doc: &TimesheetDocument) -> AppResult<String> {
    let mut json = serde_json::to_string_pretty(doc)?;
    json.push('\n');
    Ok(json)
}

fn write_temp(temp_path: &Path, json: &str, original: &Path) -> io::Result<()> {
    let mut file = File::create(temp_path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    drop(file);

    // keep the mode of the file being replaced
    let perms = fs::metadata(original)?.permissions();
    fs::set_permissions(temp_path, perms)
}

fn check_readable(path: &Path) -> Result<(), ProjectClockError> {
    match File::open(path) {
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            Err(ProjectClockError::ReadDenied(path.to_path_buf()))
        }
        _ => Ok(()),
    }
}

fn check_writable(path: &Path) -> Result<(), ProjectClockError> {
    let denied = || ProjectClockError::WriteDenied(path.to_path_buf());

    // mode bits first: privileged users can open read-only files for writing
    if fs::metadata(path).is_ok_and(|m| m.permissions().readonly()) {
        return Err(denied());
    }
    match OpenOptions::new().append(true).open(path) {
        Err(e) if e.kind() == ErrorKind::PermissionDenied => Err(denied()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::models::{ProjectSettings, TaskRecord, TimeParams};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn sample() -> TimesheetDocument {
        let mut doc = TimesheetDocument::new("Acme");
        doc.project_settings = Some(ProjectSettings {
            time_params: Some(TimeParams::default()),
        });
        doc.tasks.push(TaskRecord {
            begin: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
            end: Some(Utc.with_ymd_and_hms(2025, 3, 1, 12, 15, 0).unwrap()),
            message: Some("setup".into()),
        });
        doc
    }

    fn clock_error(e: AppError) -> ProjectClockError {
        match e {
            AppError::Clock(inner) => inner,
            other => panic!("expected a ProjectClockError, got {other:?}"),
        }
    }

    #[test]
    fn create_then_load_empty_timesheet() {
        let tmp = TempDir::new().unwrap();
        let path = create_new(tmp.path(), "Acme").unwrap();
        assert_eq!(path, tmp.path().join("Acme.pclock.json"));

        let doc = load_from(&path).unwrap();
        assert_eq!(doc, TimesheetDocument::new("Acme"));
    }

    #[test]
    fn create_refuses_to_overwrite() {
        let tmp = TempDir::new().unwrap();
        let path = create_new(tmp.path(), "Acme").unwrap();
        save_to(&sample(), &path).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let err = clock_error(create_new(tmp.path(), "Acme").unwrap_err());
        assert!(matches!(err, ProjectClockError::AlreadyExists(_)));
        assert!(err.to_string().contains("timesheet file already exists"));
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn create_rejects_path_like_names() {
        let tmp = TempDir::new().unwrap();
        for name in ["", "  ", "../evil", "a/b", ".."] {
            let err = clock_error(create_new(tmp.path(), name).unwrap_err());
            assert!(matches!(err, ProjectClockError::InvalidProjectName(_)));
        }
    }

    #[test]
    fn save_and_load_preserve_content() {
        let tmp = TempDir::new().unwrap();
        let path = create_new(tmp.path(), "Acme").unwrap();
        let doc = sample();
        save_to(&doc, &path).unwrap();
        assert_eq!(load_from(&path).unwrap(), doc);
    }

    #[test]
    fn saved_file_is_two_space_indented() {
        let tmp = TempDir::new().unwrap();
        let path = create_new(tmp.path(), "Acme").unwrap();
        save_to(&sample(), &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n  \"projectName\": \"Acme\""));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn save_leaves_no_temp_files_behind() {
        let tmp = TempDir::new().unwrap();
        let path = create_new(tmp.path(), "Acme").unwrap();
        save_to(&sample(), &path).unwrap();
        let names: Vec<String> = fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["Acme.pclock.json".to_string()]);
    }

    #[test]
    fn save_does_not_create_files() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Acme.pclock.json");
        let err = clock_error(save_to(&sample(), &path).unwrap_err());
        assert!(err.to_string().contains("file does not exist"));
        assert!(!path.exists());
    }

    #[test]
    fn malformed_json_is_reported_with_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Acme.pclock.json");
        fs::write(&path, "{ \"projectName\": ").unwrap();
        let err = clock_error(load_from(&path).unwrap_err());
        let msg = err.to_string();
        assert!(msg.contains("is not a valid JSON file"));
        assert!(msg.contains("Acme.pclock.json"));
    }

    #[test]
    fn invalid_shape_propagates_validator_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Acme.pclock.json");
        fs::write(&path, r#"{ "projectName": "Acme", "tasks": 3 }"#).unwrap();
        let err = clock_error(load_from(&path).unwrap_err());
        assert!(err.to_string().contains("not a ProjectClockData object"));
    }

    #[test]
    fn non_utf8_content_is_invalid_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Acme.pclock.json");
        fs::write(&path, b"{\"projectName\": \"Acme\xff\", \"tasks\": []}").unwrap();
        let err = clock_error(load_from(&path).unwrap_err());
        assert!(matches!(err, ProjectClockError::InvalidJson { .. }));
        assert!(err.to_string().contains("is not a valid JSON file"));
    }

    #[cfg(unix)]
    #[test]
    fn save_through_symlink_updates_target() {
        use std::os::unix::fs::symlink;

        let tmp = TempDir::new().unwrap();
        let real_dir = tmp.path().join("real");
        fs::create_dir(&real_dir).unwrap();
        let target = create_new(&real_dir, "Acme").unwrap();
        let link = tmp.path().join("Acme.pclock.json");
        symlink(&target, &link).unwrap();

        let doc = sample();
        save_to(&doc, &link).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(load_from(&target).unwrap(), doc);
        assert_eq!(load_from(&link).unwrap(), doc);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_file_is_denied() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let path = create_new(tmp.path(), "Acme").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();

        // privileged users read anything; nothing to check there
        if File::open(&path).is_ok() {
            return;
        }
        let err = clock_error(load_from(&path).unwrap_err());
        assert!(matches!(err, ProjectClockError::ReadDenied(_)));
        let msg = err.to_string();
        assert!(msg.starts_with("reading of file '"));
        assert!(msg.ends_with("denied (no permission)"));
    }

    #[cfg(unix)]
    #[test]
    fn read_only_file_cannot_be_loaded() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let path = create_new(tmp.path(), "Acme").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o444)).unwrap();

        let err = clock_error(load_from(&path).unwrap_err());
        assert!(err.to_string().contains("no write permission"));
    }
}
