use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::timesheet;
use crate::ui::messages::success;

/// Handle the `new` command
///
/// Creates `<project_name>.pclock.json` in the working directory.
/// An existing file is never overwritten.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::New { project_name } = cmd {
        let cwd = std::env::current_dir()?;
        let path = timesheet::create_new(&cwd, project_name)?;
        success(format!("Created timesheet {}", path.display()));
    }

    Ok(())
}
