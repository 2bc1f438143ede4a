//! # View Layer
//!
//! The store decides *what* the table shows; a [`StockView`] holds the rendered
//! rows. The store never touches row internals: it appends fragments built by
//! [`render::render_row`], and afterwards only refers to rows through the
//! [`RowHandle`] the view handed back.
//!
//! ## Row Contract
//!
//! Every row carries:
//! - `data-key`: the normalized key of its entry (how a click finds its entry)
//! - a name cell (`data-type="name"`) with the display name
//! - a quantity cell (`data-type="quantity"`)
//! - two action controls, `data-action="edit"` and `data-action="delete"`,
//!   labelled for assistive technology
//!
//! ## Implementations
//!
//! - [`table::TableView`]: headless table body used by every client.

use crate::model::{RowHandle, StockKey};
use serde::Serialize;

pub mod render;
pub mod table;

pub use render::render_row;
pub use table::TableView;

/// What an action control does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionIntent {
    Edit,
    Delete,
}

impl ActionIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionIntent::Edit => "edit",
            ActionIntent::Delete => "delete",
        }
    }
}

impl std::fmt::Display for ActionIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionControl {
    pub intent: ActionIntent,
    pub aria_label: String,
}

/// A rendered table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowFragment {
    pub key: StockKey,
    pub name_cell: String,
    pub quantity_cell: String,
    pub actions: Vec<ActionControl>,
}

impl RowFragment {
    pub fn action(&self, intent: ActionIntent) -> Option<&ActionControl> {
        self.actions.iter().find(|a| a.intent == intent)
    }
}

/// Holder of rendered rows.
///
/// Methods addressing a row return false when the handle is unknown; callers
/// treat that as a stale reference, never as an error.
pub trait StockView {
    /// Appends a row at the end of the table body.
    fn append_row(&mut self, row: RowFragment) -> RowHandle;

    /// Rewrites the quantity cell only.
    fn set_row_quantity(&mut self, row: RowHandle, quantity_cell: String) -> bool;

    /// Detaches the row.
    fn remove_row(&mut self, row: RowHandle) -> bool;

    /// Hides or shows the row without removing it.
    fn set_row_visible(&mut self, row: RowHandle, visible: bool) -> bool;

    /// False for hidden rows and for rows that are not attached.
    fn is_row_visible(&self, row: RowHandle) -> bool;

    /// The `data-key` carried by a row.
    fn row_key(&self, row: RowHandle) -> Option<&StockKey>;

    /// Every attached row, in display order.
    fn row_handles(&self) -> Vec<RowHandle>;
}
