use crate::errors::{AppResult, ProjectClockError};
use crate::models::{TaskRecord, TimesheetDocument};
use crate::ui::Prompter;
use chrono::{DateTime, Utc};
use tracing::debug;

pub struct ClockLogic;

impl ClockLogic {
    /// Append a running task beginning at `now`.
    ///
    /// A task that is still running is stopped first, after confirmation.
    /// Returns the task that got stopped on the way, if any.
    pub fn start(
        doc: &mut TimesheetDocument,
        now: DateTime<Utc>,
        message: Option<String>,
        prompter: &dyn Prompter,
    ) -> AppResult<Option<TaskRecord>> {
        let mut stopped = None;

        if let Some(running) = doc.running_task() {
            let since = running.begin_str();
            let question = format!("A task is running since {since}. Stop it and start a new one?");
            if !prompter.confirm(&question, true)? {
                return Err(ProjectClockError::TaskRunning(since).into());
            }
            stopped = Some(Self::stop(doc, now, None)?);
        }

        let begin = match doc.tasks.last().and_then(|t| t.end) {
            Some(prev_end) if prev_end > now => prev_end,
            _ => now,
        };
        doc.tasks.push(TaskRecord::started_at(begin, message));
        debug!(project = %doc.project_name, tasks = doc.tasks.len(), "task started");
        Ok(stopped)
    }

    /// Close the running task at `now`, optionally replacing its message.
    pub fn stop(
        doc: &mut TimesheetDocument,
        now: DateTime<Utc>,
        message: Option<String>,
    ) -> Result<TaskRecord, ProjectClockError> {
        let task = doc
            .running_task_mut()
            .ok_or(ProjectClockError::NoTaskRunning)?;

        // a clock set backwards must not produce an inverted record
        task.end = Some(now.max(task.begin));
        if message.is_some() {
            task.message = message;
        }
        Ok(task.clone())
    }
}
