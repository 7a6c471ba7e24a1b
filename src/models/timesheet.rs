use super::task::TaskRecord;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Root of a `<project>.pclock.json` file.
///
/// Only serialized directly; reading goes through
/// [`crate::timesheet::validator::validate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetDocument {
    pub project_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_settings: Option<ProjectSettings>,
    pub tasks: Vec<TaskRecord>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_params: Option<TimeParams>,
}

/// Unit conversion factors: hours per day, days per week,
/// weeks per month, months per year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeParams {
    pub day: f64,
    pub week: f64,
    pub month: f64,
    pub year: f64,
}

impl Default for TimeParams {
    fn default() -> Self {
        Self {
            day: 8.0,
            week: 5.0,
            month: 4.0,
            year: 12.0,
        }
    }
}

impl TimesheetDocument {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            project_settings: None,
            tasks: Vec::new(),
        }
    }

    pub fn time_params(&self) -> Option<TimeParams> {
        self.project_settings.as_ref().and_then(|s| s.time_params)
    }

    pub fn running_task(&self) -> Option<&TaskRecord> {
        self.tasks.last().filter(|t| t.is_running())
    }

    pub fn running_task_mut(&mut self) -> Option<&mut TaskRecord> {
        self.tasks.last_mut().filter(|t| t.is_running())
    }

    pub fn total_duration(&self, now: DateTime<Utc>) -> Duration {
        self.tasks
            .iter()
            .fold(Duration::zero(), |acc, t| acc + t.duration(now))
    }
}
