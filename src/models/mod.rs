pub mod task;
pub mod timesheet;

pub use task::TaskRecord;
pub use timesheet::{ProjectSettings, TimeParams, TimesheetDocument};
