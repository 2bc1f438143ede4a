use super::{RowFragment, StockView};
use crate::model::{RowHandle, StockKey};
use serde::Serialize;

/// A row attached to the table body.
#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    pub handle: RowHandle,
    pub fragment: RowFragment,
    pub hidden: bool,
}

/// Headless table body.
///
/// Rows keep insertion order. Handles are never reused, so a handle kept after
/// its row was removed stays stale forever instead of pointing at a newer row.
#[derive(Debug, Default)]
pub struct TableView {
    rows: Vec<TableRow>,
    next_id: u64,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().filter(|r| !r.hidden)
    }

    pub fn row(&self, handle: RowHandle) -> Option<&TableRow> {
        self.rows.iter().find(|r| r.handle == handle)
    }

    /// Resolves a `data-key` back to its row.
    pub fn find_by_key(&self, key: &StockKey) -> Option<&TableRow> {
        self.rows.iter().find(|r| &r.fragment.key == key)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Table body markup. Hidden rows are emitted with `style="display: none"`.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<tbody id=\"bodyStockTable\">\n");
        for row in &self.rows {
            let fragment = row.fragment.to_html();
            if row.hidden {
                html.push_str(&fragment.replacen("<tr ", "<tr style=\"display: none\" ", 1));
            } else {
                html.push_str(&fragment);
            }
        }
        html.push_str("</tbody>\n");
        html
    }

    fn row_mut(&mut self, handle: RowHandle) -> Option<&mut TableRow> {
        self.rows.iter_mut().find(|r| r.handle == handle)
    }
}

impl StockView for TableView {
    fn append_row(&mut self, row: RowFragment) -> RowHandle {
        self.next_id += 1;
        let handle = RowHandle::new(self.next_id);
        self.rows.push(TableRow {
            handle,
            fragment: row,
            hidden: false,
        });
        handle
    }

    fn set_row_quantity(&mut self, row: RowHandle, quantity_cell: String) -> bool {
        match self.row_mut(row) {
            Some(r) => {
                r.fragment.quantity_cell = quantity_cell;
                true
            }
            None => false,
        }
    }

    fn remove_row(&mut self, row: RowHandle) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.handle != row);
        self.rows.len() != before
    }

    fn set_row_visible(&mut self, row: RowHandle, visible: bool) -> bool {
        match self.row_mut(row) {
            Some(r) => {
                r.hidden = !visible;
                true
            }
            None => false,
        }
    }

    fn is_row_visible(&self, row: RowHandle) -> bool {
        self.row(row).map(|r| !r.hidden).unwrap_or(false)
    }

    fn row_key(&self, row: RowHandle) -> Option<&StockKey> {
        self.row(row).map(|r| &r.fragment.key)
    }

    fn row_handles(&self) -> Vec<RowHandle> {
        self.rows.iter().map(|r| r.handle).collect()
    }
}
