//! Dialogs on the terminal.
//!
//! The page asks its questions synchronously; this prompter prints the question
//! and blocks on the next input line. In JSON mode dialogs go to stderr so that
//! stdout stays machine-readable.

use super::input::LineSource;
use super::render::Output;
use super::setup::OutputMode;
use super::styles::names;
use std::io::Write;
use stockzapp::prompt::{Prompter, ScriptedPrompter};

pub struct TerminalPrompter<'a> {
    lines: &'a LineSource,
    output: &'a Output,
    /// Answers confirmations without reading input (`--yes`).
    auto_confirm: Option<ScriptedPrompter>,
    /// Echo answers read from input, for sessions not typed on a terminal.
    echo: bool,
}

impl<'a> TerminalPrompter<'a> {
    pub fn new(lines: &'a LineSource, output: &'a Output, assume_yes: bool, echo: bool) -> Self {
        Self {
            lines,
            output,
            auto_confirm: assume_yes.then(ScriptedPrompter::always_yes),
            echo,
        }
    }

    fn ask(&self, question: &str) -> Option<String> {
        self.emit(&format!("{} ", question));
        let answer = self.lines.next_line();
        if self.echo || answer.is_none() {
            self.emit(&format!("{}\n", answer.as_deref().unwrap_or("")));
        }
        answer
    }

    fn emit(&self, text: &str) {
        if self.output.mode() == OutputMode::Json {
            eprint!("{}", text);
            let _ = std::io::stderr().flush();
        } else {
            print!("{}", text);
            let _ = std::io::stdout().flush();
        }
    }
}

impl Prompter for TerminalPrompter<'_> {
    fn confirm(&mut self, message: &str) -> bool {
        let question = format!(
            "{} {} [y/N]",
            self.output.styled(names::QUESTION, "?"),
            message
        );

        if let Some(auto) = self.auto_confirm.as_mut() {
            let answer = auto.confirm(message);
            self.emit(&format!("{} {}\n", question, if answer { "yes" } else { "no" }));
            return answer;
        }

        match self.ask(&question) {
            Some(answer) => is_yes(&answer),
            None => false,
        }
    }

    fn prompt(&mut self, message: &str, default: &str) -> Option<String> {
        let question = format!(
            "{} {} [{}]",
            self.output.styled(names::QUESTION, "?"),
            message,
            default
        );
        let answer = self.ask(&question)?;
        let answer = answer.trim();
        if answer.is_empty() {
            None
        } else {
            Some(answer.to_string())
        }
    }

    fn alert(&mut self, message: &str) {
        for line in message.lines() {
            self.emit(&format!("{} {}\n", self.output.styled(names::ALERT, "!"), line));
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
