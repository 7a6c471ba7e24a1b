use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::timesheet;
use crate::ui::messages::header;
use crate::utils::format_duration;
use chrono::Utc;
use std::path::Path;

pub fn handle(file: Option<&Path>, cfg: &Config) -> AppResult<()> {
    let (_, doc) = timesheet::load(file)?;
    let summary = ReportLogic::summarize(&doc, cfg, Utc::now());

    header(&summary.project_name);
    match &summary.running {
        Some((task, elapsed)) => println!(
            "Running : since {} ({}){}",
            task.begin_str(),
            format_duration(*elapsed, &summary.params),
            task.message
                .as_deref()
                .map(|m| format!(" - {m}"))
                .unwrap_or_default()
        ),
        None => println!("Running : idle"),
    }
    println!("Tasks   : {}", summary.task_count);
    println!("Total   : {}", summary.total_str());

    Ok(())
}
