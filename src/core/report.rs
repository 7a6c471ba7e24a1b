use crate::config::Config;
use crate::models::{TaskRecord, TimeParams, TimesheetDocument};
use crate::utils::format_duration;
use crate::utils::table::Table;
use chrono::{DateTime, Duration, Utc};

/// Snapshot of a timesheet at a given instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub project_name: String,
    pub task_count: usize,
    pub running: Option<(TaskRecord, Duration)>,
    pub total: Duration,
    pub params: TimeParams,
}

impl Summary {
    pub fn total_str(&self) -> String {
        format_duration(self.total, &self.params)
    }
}

pub struct ReportLogic;

impl ReportLogic {
    /// The timesheet's own conversion factors win over the config ones.
    pub fn effective_params(doc: &TimesheetDocument, cfg: &Config) -> TimeParams {
        doc.time_params().unwrap_or(cfg.time_params)
    }

    pub fn summarize(doc: &TimesheetDocument, cfg: &Config, now: DateTime<Utc>) -> Summary {
        Summary {
            project_name: doc.project_name.clone(),
            task_count: doc.tasks.len(),
            running: doc.running_task().map(|t| (t.clone(), t.duration(now))),
            total: doc.total_duration(now),
            params: Self::effective_params(doc, cfg),
        }
    }

    pub fn task_table(doc: &TimesheetDocument, cfg: &Config, now: DateTime<Utc>) -> Table {
        let params = Self::effective_params(doc, cfg);
        let mut table = Table::new(["#", "Begin", "End", "Duration", "Message"]);
        for (i, task) in doc.tasks.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                task.begin_str(),
                task.end_str(),
                format_duration(task.duration(now), &params),
                task.message.clone().unwrap_or_default(),
            ]);
        }
        table
    }
}
