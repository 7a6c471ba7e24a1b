use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EditOutcome};
use crate::errors::AppResult;
use crate::timesheet;
use crate::ui::TerminalPrompter;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

pub fn handle(cmd: &Commands, file: Option<&Path>, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { yes } = cmd {
        let (path, doc) = timesheet::load(file)?;
        let prompter = TerminalPrompter::new(cfg.editor.clone(), *yes);

        match EditLogic::edit(&doc, &path, &prompter)? {
            EditOutcome::Unchanged => info("No changes."),
            EditOutcome::Discarded => warning("Changes discarded."),
            EditOutcome::Save(updated) => {
                timesheet::save(&updated, Some(&path))?;
                success(format!("Saved {}", path.display()));
            }
        }
    }

    Ok(())
}
