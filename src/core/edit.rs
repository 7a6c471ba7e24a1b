use crate::errors::{AppResult, ProjectClockError};
use crate::models::TimesheetDocument;
use crate::timesheet::store;
use crate::ui::Prompter;
use std::path::Path;

#[derive(Debug, PartialEq)]
pub enum EditOutcome {
    Unchanged,
    Discarded,
    Save(TimesheetDocument),
}

pub struct EditLogic;

impl EditLogic {
    /// Let the user rewrite the whole document as JSON.
    ///
    /// The edited text goes through the same parse + validation as a file
    /// on disk; `path` only names the source in error messages.
    pub fn edit(
        doc: &TimesheetDocument,
        path: &Path,
        prompter: &dyn Prompter,
    ) -> AppResult<EditOutcome> {
        let original = store::to_json(doc)?;
        let edited = prompter.edit(&original)?;
        if edited.trim() == original.trim() {
            return Ok(EditOutcome::Unchanged);
        }

        let updated = store::parse(path, edited.as_bytes())?;
        if updated.project_name != doc.project_name {
            return Err(ProjectClockError::ProjectRenamed {
                from: doc.project_name.clone(),
                to: updated.project_name,
            }
            .into());
        }
        if updated == *doc {
            return Ok(EditOutcome::Unchanged);
        }

        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        if !prompter.confirm(&format!("Save changes to {file}?"), true)? {
            return Ok(EditOutcome::Discarded);
        }
        Ok(EditOutcome::Save(updated))
    }
}
