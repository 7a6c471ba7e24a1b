//! Timesheet files: discovery, validation and persistence.

pub mod resolver;
pub mod store;
pub mod validator;

/// Naming convention for discoverable timesheet files.
pub const TIMESHEET_SUFFIX: &str = ".pclock.json";

pub use resolver::resolve;
pub use store::{create_new, load, save};
pub use validator::validate;
