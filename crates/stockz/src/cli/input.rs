//! Session input.
//!
//! Lines come from stdin or a script file, read on a dedicated thread and handed
//! to the event loop over a channel. The loop waits with a timeout so that
//! timers (the search debounce) fire while the user is idle.

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Instant;

/// Session commands with their usage line, as listed by `help`.
pub const COMMANDS: &[(&str, &str)] = &[
    ("add <name> <quantity>", "Add a product, or add to one already in stock"),
    ("edit <row>", "Change the quantity of a row"),
    ("delete <row>", "Remove a row"),
    ("search [term]", "Filter the table (empty term shows everything)"),
    ("stock", "Open or close the stock section"),
    ("list", "Show the stock table"),
    ("summary", "Product count and total quantity"),
    ("verify", "Check that every product has exactly one row"),
    ("html", "Print the table body markup"),
    ("help", "Show this list"),
    ("quit", "End the session"),
];

/// One parsed session line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Add { name: String, quantity: String },
    Edit(String),
    Delete(String),
    Search(String),
    Stock,
    List,
    Summary,
    Verify,
    Html,
    Help,
    Quit,
    Blank,
}

/// Parses a session line. `<row>` selectors are left for the API to resolve.
pub fn parse_line(raw: &str) -> Result<Line, String> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Line::Blank);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command.to_lowercase().as_str() {
        "add" => Ok(parse_add(rest)),
        "edit" => required(rest, "edit <row>").map(Line::Edit),
        "delete" | "rm" => required(rest, "delete <row>").map(Line::Delete),
        "search" => Ok(Line::Search(rest.to_string())),
        "stock" => Ok(Line::Stock),
        "list" | "ls" => Ok(Line::List),
        "summary" => Ok(Line::Summary),
        "verify" => Ok(Line::Verify),
        "html" => Ok(Line::Html),
        "help" | "?" => Ok(Line::Help),
        "quit" | "exit" | "q" => Ok(Line::Quit),
        other => Err(format!(
            "Unknown command: {} (type `help` for a list)",
            other
        )),
    }
}

/// The quantity is the last word; everything before it is the product name.
fn parse_add(rest: &str) -> Line {
    let (name, quantity) = match rest.rsplit_once(char::is_whitespace) {
        Some((name, quantity)) => (name.trim(), quantity),
        None if rest.parse::<f64>().is_ok() => ("", rest),
        None => (rest, ""),
    };
    Line::Add {
        name: name.to_string(),
        quantity: quantity.to_string(),
    }
}

fn required(rest: &str, usage: &str) -> Result<String, String> {
    if rest.is_empty() {
        Err(format!("Usage: {}", usage))
    } else {
        Ok(rest.to_string())
    }
}

pub enum Recv {
    Line(String),
    Timeout,
    Closed,
}

/// Lines read on a background thread.
pub struct LineSource {
    rx: Receiver<String>,
}

impl LineSource {
    pub fn spawn<R: BufRead + Send + 'static>(reader: R) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for line in reader.lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "input read failed");
                        break;
                    }
                }
            }
        });
        Self { rx }
    }

    /// Waits for the next line, giving up at `deadline`.
    pub fn recv_until(&self, deadline: Option<Instant>) -> Recv {
        let Some(deadline) = deadline else {
            return match self.rx.recv() {
                Ok(line) => Recv::Line(line),
                Err(_) => Recv::Closed,
            };
        };

        let timeout = deadline.saturating_duration_since(Instant::now());
        match self.rx.recv_timeout(timeout) {
            Ok(line) => Recv::Line(line),
            Err(RecvTimeoutError::Timeout) => Recv::Timeout,
            Err(RecvTimeoutError::Disconnected) => Recv::Closed,
        }
    }

    /// Blocks for the next line. `None` once input is exhausted.
    pub fn next_line(&self) -> Option<String> {
        self.rx.recv().ok()
    }
}
