//! # Command Layer
//!
//! The business logic behind every user-visible action. Each command lives in its
//! own submodule as a plain function over a [`StockStore`].
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Implement one action each (submit, edit, delete, search, list, summary, verify)
//! - Drive the [`Prompter`](crate::prompt::Prompter) for the dialogs the action needs
//! - Return a structured [`CmdResult`] with the rows to show and leveled messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal or page I/O**: dialogs go through the injected prompter, and
//!   everything else is returned as data.
//! - **Selector parsing**: turning `"2"` or `"arroz"` into a key is the API's job.
//! - **Timing**: debounce and cooldown live in the page.
//!
//! ## Stale Keys
//!
//! Edit and delete receive keys that may have vanished between the click and the
//! dispatch. They return an empty result, logging at debug level.
//!
//! ## Command Modules
//!
//! - [`submit`]: form submission (validate, then add or merge)
//! - [`edit`]: prompt for a new quantity
//! - [`delete`]: confirm and remove
//! - [`search`]: apply the search filter
//! - [`list`]: table contents
//! - [`summary`]: count and total quantity
//! - [`verify`]: entry/row consistency check

use crate::model::{StockEntry, StockKey};
use crate::store::StockStore;
use crate::view::StockView;
use serde::Serialize;

pub mod delete;
pub mod edit;
pub mod list;
pub mod search;
pub mod submit;
pub mod summary;
pub mod verify;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// An entry paired with its position among the visible rows.
///
/// `index` is the 1-based position a user would count on screen; hidden rows
/// have none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayEntry {
    pub index: Option<usize>,
    pub key: StockKey,
    pub name: String,
    pub quantity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StockSummary {
    pub count: usize,
    pub total_quantity: f64,
}

/// Result of a command.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct CmdResult {
    /// Rows the command touched or listed.
    pub rows: Vec<DisplayEntry>,
    pub messages: Vec<CmdMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<StockSummary>,
    /// Visible row count after a search pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<usize>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_rows(mut self, rows: Vec<DisplayEntry>) -> Self {
        self.rows = rows;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
            && self.messages.is_empty()
            && self.summary.is_none()
            && self.visible.is_none()
    }
}

/// Every entry in table order, with visible positions assigned.
pub fn display_entries<V: StockView>(store: &StockStore<V>) -> Vec<DisplayEntry> {
    let mut position = 0;
    store
        .entries()
        .into_iter()
        .map(|entry| {
            let index = if store.view().is_row_visible(entry.row) {
                position += 1;
                Some(position)
            } else {
                None
            };
            to_display(entry, index)
        })
        .collect()
}

/// The display form of a single entry, looked up in the current table.
pub fn display_entry<V: StockView>(store: &StockStore<V>, key: &StockKey) -> Option<DisplayEntry> {
    display_entries(store).into_iter().find(|e| &e.key == key)
}

fn to_display(entry: &StockEntry, index: Option<usize>) -> DisplayEntry {
    DisplayEntry {
        index,
        key: entry.key.clone(),
        name: entry.display_name.clone(),
        quantity: entry.quantity,
    }
}
