//! Unified application error types.
//!
//! Two tiers:
//! - [`ProjectClockError`]: expected failures with a precise, user-facing
//!   message (missing file, bad JSON, invalid timesheet, ...). Reported on
//!   stderr and turned into exit code 1.
//! - everything else wrapped by [`AppError`]: unexpected failures that are
//!   propagated untouched up to `main`.
//!
//! A cancelled interactive prompt is neither: it is [`AppError::Cancelled`]
//! and ends the process cleanly.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectClockError {
    // ---------------------------
    // File resolution
    // ---------------------------
    #[error("{0}")]
    NotFound(String),

    #[error("reading of file '{}' denied (no permission)", .0.display())]
    ReadDenied(PathBuf),

    #[error("no write permission to file '{}'", .0.display())]
    WriteDenied(PathBuf),

    #[error("timesheet file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    // ---------------------------
    // Content
    // ---------------------------
    #[error("{} is not a valid JSON file ({reason})", .path.display())]
    InvalidJson { path: PathBuf, reason: String },

    #[error("not a ProjectClockData object ({0})")]
    InvalidData(String),

    #[error("invalid project name '{0}'")]
    InvalidProjectName(String),

    #[error("projectName cannot be changed ('{from}' -> '{to}')")]
    ProjectRenamed { from: String, to: String },

    // ---------------------------
    // Clock state
    // ---------------------------
    #[error("a task is still running (started {0})")]
    TaskRunning(String),

    #[error("no task is running")]
    NoTaskRunning,

    // ---------------------------
    // Environment
    // ---------------------------
    #[error("editor error: {0}")]
    Editor(String),

    #[error("no terminal available for the prompt (use --yes to confirm)")]
    NoTerminal,

    #[error("configuration error: {0}")]
    Config(String),
}

impl ProjectClockError {
    pub fn file_missing(path: &std::path::Path) -> Self {
        Self::NotFound(format!("file does not exist: {}", path.display()))
    }

    pub fn no_timesheet() -> Self {
        Self::NotFound("no time sheet file in the directory".into())
    }

    pub fn ambiguous_timesheet() -> Self {
        Self::NotFound("more than one time sheet file in the directory".into())
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Clock(#[from] ProjectClockError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("prompt error: {0}")]
    Prompt(String),

    #[error("operation cancelled")]
    Cancelled,
}

impl AppError {
    /// True for failures that carry a user-facing message.
    pub fn is_expected(&self) -> bool {
        matches!(self, AppError::Clock(_))
    }
}

impl From<inquire::InquireError> for AppError {
    fn from(e: inquire::InquireError) -> Self {
        use inquire::InquireError;
        match e {
            InquireError::OperationCanceled | InquireError::OperationInterrupted => {
                AppError::Cancelled
            }
            InquireError::NotTTY => AppError::Clock(ProjectClockError::NoTerminal),
            InquireError::IO(io) => AppError::Io(io),
            other => AppError::Prompt(other.to_string()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
