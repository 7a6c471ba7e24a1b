//! Interactive prompts: yes/no confirmation and external editor.
//!
//! Commands only see the [`Prompter`] trait. A prompt the user aborts
//! (Ctrl-C, Esc, editor quitting with an error) yields
//! [`AppError::Cancelled`], which `main` turns into a clean exit.

use crate::errors::{AppError, AppResult, ProjectClockError};
use std::fs;
use std::io::Write;
use std::process::Command;
use tracing::debug;

pub trait Prompter {
    fn confirm(&self, message: &str, default: bool) -> AppResult<bool>;

    /// Hand `text` to the user for editing and return the result.
    fn edit(&self, text: &str) -> AppResult<String>;
}

pub struct TerminalPrompter {
    editor: Option<String>,
    assume_yes: bool,
}

impl TerminalPrompter {
    pub fn new(editor: Option<String>, assume_yes: bool) -> Self {
        Self { editor, assume_yes }
    }

    fn editor_command(&self) -> String {
        editor_command(
            self.editor.as_deref(),
            std::env::var("VISUAL").ok(),
            std::env::var("EDITOR").ok(),
        )
    }
}

/// Configured editor, then $VISUAL, then $EDITOR, then a platform default.
pub fn editor_command(
    configured: Option<&str>,
    visual: Option<String>,
    editor: Option<String>,
) -> String {
    configured
        .map(str::to_string)
        .into_iter()
        .chain(visual)
        .chain(editor)
        .find(|e| !e.trim().is_empty())
        .unwrap_or_else(|| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str, default: bool) -> AppResult<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        let answer = inquire::Confirm::new(message)
            .with_default(default)
            .prompt()?;
        Ok(answer)
    }

    fn edit(&self, text: &str) -> AppResult<String> {
        let command = self.editor_command();
        let mut parts = command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| ProjectClockError::Editor("empty editor command".into()))?;

        let mut file = tempfile::Builder::new()
            .prefix("pclock-")
            .suffix(".json")
            .tempfile()?;
        file.write_all(text.as_bytes())?;
        file.flush()?;

        debug!(editor = %command, file = %file.path().display(), "launching editor");
        let status = Command::new(program)
            .args(parts)
            .arg(file.path())
            .status()
            .map_err(|e| ProjectClockError::Editor(format!("cannot launch '{}': {}", command, e)))?;

        if !status.success() {
            debug!(?status, "editor exited unsuccessfully");
            return Err(AppError::Cancelled);
        }

        Ok(fs::read_to_string(file.path())?)
    }
}
