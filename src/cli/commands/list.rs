use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::timesheet;
use crate::ui::messages::{header, info};
use chrono::Utc;
use std::path::Path;

pub fn handle(file: Option<&Path>, cfg: &Config) -> AppResult<()> {
    let (_, doc) = timesheet::load(file)?;
    let now = Utc::now();

    header(&doc.project_name);
    let table = ReportLogic::task_table(&doc, cfg, now);
    if table.is_empty() {
        info("No tasks recorded yet.");
        return Ok(());
    }

    print!("{}", table.render());
    let summary = ReportLogic::summarize(&doc, cfg, now);
    println!("\nTotal: {}", summary.total_str());

    Ok(())
}
