//! Command logic on in-memory timesheets.
//!
//! Nothing in here touches the process: files are read and written by the
//! handlers in `cli::commands`, prompts come in through [`Prompter`].
//!
//! [`Prompter`]: crate::ui::Prompter

pub mod clock;
pub mod edit;
pub mod report;

#[cfg(test)]
pub(crate) mod testing;
