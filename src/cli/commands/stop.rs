use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::timesheet;
use crate::ui::messages::success;
use crate::utils::format_duration;
use chrono::Utc;
use std::path::Path;

pub fn handle(cmd: &Commands, file: Option<&Path>, cfg: &Config) -> AppResult<()> {
    if let Commands::Stop { message } = cmd {
        let (path, mut doc) = timesheet::load(file)?;
        let now = Utc::now();

        let task = ClockLogic::stop(&mut doc, now, message.clone())?;
        timesheet::save(&doc, Some(&path))?;

        let params = ReportLogic::effective_params(&doc, cfg);
        success(format!(
            "Stopped task in {} after {}",
            doc.project_name,
            format_duration(task.duration(now), &params)
        ));
    }

    Ok(())
}
