use chrono::{DateTime, Duration, Local, Utc};
use serde::{Deserialize, Serialize};

/// One clocked activity inside a timesheet.
///
/// A record without `end` is the running task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskRecord {
    pub begin: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TaskRecord {
    pub fn started_at(begin: DateTime<Utc>, message: Option<String>) -> Self {
        Self {
            begin,
            end: None,
            message,
        }
    }

    pub fn is_running(&self) -> bool {
        self.end.is_none()
    }

    /// Clocked time; a running task counts up to `now`.
    pub fn duration(&self, now: DateTime<Utc>) -> Duration {
        self.end.unwrap_or(now) - self.begin
    }

    pub fn begin_str(&self) -> String {
        self.begin
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    }

    pub fn end_str(&self) -> String {
        match self.end {
            Some(end) => end.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
            None => "--".to_string(),
        }
    }
}
