use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::timesheet;
use crate::ui::TerminalPrompter;
use crate::ui::messages::{info, success};
use crate::utils::format_duration;
use chrono::Utc;
use std::path::Path;

pub fn handle(cmd: &Commands, file: Option<&Path>, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { message, yes } = cmd {
        let (path, mut doc) = timesheet::load(file)?;
        let prompter = TerminalPrompter::new(cfg.editor.clone(), *yes);
        let now = Utc::now();

        let stopped = ClockLogic::start(&mut doc, now, message.clone(), &prompter)?;
        timesheet::save(&doc, Some(&path))?;

        if let Some(prev) = stopped {
            let params = ReportLogic::effective_params(&doc, cfg);
            info(format!(
                "Stopped task started {} after {}",
                prev.begin_str(),
                format_duration(prev.duration(now), &params)
            ));
        }
        match message {
            Some(m) => success(format!("Started '{}' in {}", m, doc.project_name)),
            None => success(format!("Started a task in {}", doc.project_name)),
        }
    }

    Ok(())
}
