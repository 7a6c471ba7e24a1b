//! Shape validation of a parsed timesheet.
//!
//! Every JSON value that should become a [`TimesheetDocument`] goes through
//! [`validate`]. It is all-or-nothing: either a fully typed document comes
//! out or a [`ProjectClockError::InvalidData`] naming the offending field.

use crate::errors::ProjectClockError;
use crate::models::{ProjectSettings, TaskRecord, TimeParams, TimesheetDocument};
use serde_json::{Map, Value};

type Object = Map<String, Value>;

fn invalid(reason: impl Into<String>) -> ProjectClockError {
    ProjectClockError::InvalidData(reason.into())
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn expect_object(v: Value, path: &str) -> Result<Object, ProjectClockError> {
    match v {
        Value::Object(map) => Ok(map),
        other => Err(invalid(format!(
            "{path} must be an object, found {}",
            kind(&other)
        ))),
    }
}

fn reject_unknown(obj: &Object, path: &str) -> Result<(), ProjectClockError> {
    match obj.keys().next() {
        Some(key) => Err(invalid(format!("unknown field '{key}' in {path}"))),
        None => Ok(()),
    }
}

/// Turn a raw JSON value into a typed timesheet or fail.
pub fn validate(raw: Value) -> Result<TimesheetDocument, ProjectClockError> {
    let mut root = expect_object(raw, "document")?;

    let project_name = parse_project_name(root.remove("projectName"))?;
    let project_settings = match root.remove("projectSettings") {
        Some(v) => Some(parse_settings(v)?),
        None => None,
    };
    let tasks = parse_tasks(root.remove("tasks"))?;
    reject_unknown(&root, "document")?;

    Ok(TimesheetDocument {
        project_name,
        project_settings,
        tasks,
    })
}

fn parse_project_name(v: Option<Value>) -> Result<String, ProjectClockError> {
    match v {
        None => Err(invalid("missing projectName")),
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s),
        Some(Value::String(_)) => Err(invalid("projectName is empty")),
        Some(other) => Err(invalid(format!(
            "projectName must be a string, found {}",
            kind(&other)
        ))),
    }
}

fn parse_settings(v: Value) -> Result<ProjectSettings, ProjectClockError> {
    let mut obj = expect_object(v, "projectSettings")?;
    let time_params = match obj.remove("timeParams") {
        Some(v) => Some(parse_time_params(v)?),
        None => None,
    };
    reject_unknown(&obj, "projectSettings")?;
    Ok(ProjectSettings { time_params })
}

fn parse_time_params(v: Value) -> Result<TimeParams, ProjectClockError> {
    let obj = expect_object(v, "projectSettings.timeParams")?;
    for key in ["day", "week", "month", "year"] {
        match obj.get(key) {
            None => {
                return Err(invalid(format!(
                    "projectSettings.timeParams.{key} is missing"
                )));
            }
            Some(Value::Number(n)) if n.as_f64().is_some_and(|f| f > 0.0) => {}
            Some(other) => {
                return Err(invalid(format!(
                    "projectSettings.timeParams.{key} must be a positive number, found {}",
                    kind(other)
                )));
            }
        }
    }
    serde_json::from_value(Value::Object(obj))
        .map_err(|e| invalid(format!("projectSettings.timeParams: {e}")))
}

fn parse_tasks(v: Option<Value>) -> Result<Vec<TaskRecord>, ProjectClockError> {
    let items = match v {
        None => return Err(invalid("missing tasks")),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(invalid(format!(
                "tasks must be an array, found {}",
                kind(&other)
            )));
        }
    };

    let last = items.len().saturating_sub(1);
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let task = parse_task(item, i)?;
            if task.is_running() && i != last {
                return Err(invalid(format!(
                    "tasks[{i}] has no end but is not the last task"
                )));
            }
            Ok(task)
        })
        .collect()
}

fn parse_task(v: Value, index: usize) -> Result<TaskRecord, ProjectClockError> {
    let path = format!("tasks[{index}]");
    let obj = expect_object(v, &path)?;

    // serde would read an explicit null as "absent"
    for key in ["end", "message"] {
        if obj.get(key).is_some_and(Value::is_null) {
            return Err(invalid(format!("{path}.{key} must not be null")));
        }
    }

    let task: TaskRecord =
        serde_json::from_value(Value::Object(obj)).map_err(|e| invalid(format!("{path}: {e}")))?;

    if let Some(end) = task.end
        && end < task.begin
    {
        return Err(invalid(format!("{path} ends before it begins")));
    }
    Ok(task)
}
