//! # Dialogs
//!
//! Some decisions belong to the user, not to the store: merging a re-added
//! product, confirming a delete, typing a new quantity. Those questions go
//! through a [`Prompter`] supplied by the caller.
//!
//! Calls are synchronous and modal: the event being handled waits until the
//! user answers. A terminal client reads the answer from its input stream; tests
//! use [`ScriptedPrompter`] with canned answers.

use std::collections::VecDeque;

pub trait Prompter {
    /// Asks a yes/no question.
    fn confirm(&mut self, message: &str) -> bool;

    /// Asks for a line of text seeded with `default`. `None` means cancelled.
    fn prompt(&mut self, message: &str, default: &str) -> Option<String>;

    /// Shows a blocking message.
    fn alert(&mut self, message: &str);
}

/// A dialog as it was shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Confirm(String),
    Prompt { message: String, default: String },
    Alert(String),
}

/// Prompter answering from queues.
///
/// When the confirm queue runs dry it falls back to `default_confirm`; when the
/// prompt queue runs dry the prompt is cancelled. Every dialog is recorded in
/// [`ScriptedPrompter::shown`].
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    confirms: VecDeque<bool>,
    answers: VecDeque<Option<String>>,
    default_confirm: bool,
    shown: Vec<Dialog>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A prompter that says yes to every confirmation.
    pub fn always_yes() -> Self {
        Self {
            default_confirm: true,
            ..Self::default()
        }
    }

    pub fn confirm_with(mut self, answer: bool) -> Self {
        self.confirms.push_back(answer);
        self
    }

    pub fn answer_with(mut self, answer: Option<&str>) -> Self {
        self.answers.push_back(answer.map(str::to_string));
        self
    }

    pub fn shown(&self) -> &[Dialog] {
        &self.shown
    }

    pub fn alerts(&self) -> Vec<&str> {
        self.shown
            .iter()
            .filter_map(|d| match d {
                Dialog::Alert(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, message: &str) -> bool {
        self.shown.push(Dialog::Confirm(message.to_string()));
        self.confirms.pop_front().unwrap_or(self.default_confirm)
    }

    fn prompt(&mut self, message: &str, default: &str) -> Option<String> {
        self.shown.push(Dialog::Prompt {
            message: message.to_string(),
            default: default.to_string(),
        });
        self.answers.pop_front().flatten()
    }

    fn alert(&mut self, message: &str) {
        self.shown.push(Dialog::Alert(message.to_string()));
    }
}
