use crate::errors::{AppError, AppResult};
use crate::ui::Prompter;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Prompter answering from a script; an exhausted script cancels.
#[derive(Default)]
pub struct ScriptedPrompter {
    pub confirms: RefCell<VecDeque<bool>>,
    pub edits: RefCell<VecDeque<String>>,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn confirming(answers: &[bool]) -> Self {
        let p = Self::default();
        p.confirms.borrow_mut().extend(answers.iter().copied());
        p
    }

    pub fn with_edit(self, text: impl Into<String>) -> Self {
        self.edits.borrow_mut().push_back(text.into());
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str, _default: bool) -> AppResult<bool> {
        self.asked.borrow_mut().push(message.to_string());
        self.confirms
            .borrow_mut()
            .pop_front()
            .ok_or(AppError::Cancelled)
    }

    fn edit(&self, _text: &str) -> AppResult<String> {
        self.edits.borrow_mut().pop_front().ok_or(AppError::Cancelled)
    }
}
