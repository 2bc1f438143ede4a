//! # Stock Store
//!
//! [`StockStore`] is the single owner of stock state: a map from [`StockKey`] to
//! [`StockEntry`], plus the [`StockView`] holding the rendered rows. It sits
//! between form input and the table.
//!
//! ## Invariants
//!
//! - **One key, one product**: names are normalized before lookup, so "Café" and
//!   "cafe" land on the same entry.
//! - **1:1 entries and rows**: every entry has exactly one attached row whose
//!   `data-key` is the entry's key, and every row has an entry. [`StockStore::verify`]
//!   checks this.
//! - **Valid quantities only**: a stored quantity is always finite and at least the
//!   configured minimum. `add` and `update` re-validate their inputs even though the
//!   form validates first, since they are public entry points.
//!
//! ## Stale References
//!
//! `update` and `delete` on a key that is not in stock do nothing. Clicks can
//! race with deletes; acting on a vanished row is not an error.
//!
//! ## Search
//!
//! [`StockStore::filter`] only toggles row visibility. Hidden rows stay attached
//! and their entries untouched, so clearing the filter shows everything again
//! without rebuilding a single row.

use crate::error::{Result, StockzError};
use crate::model::{AddOutcome, RowHandle, StockEntry, StockKey};
use crate::normalize::normalize;
use crate::prompt::Prompter;
use crate::validation::{format_quantity, is_valid_quantity, merge_error, validate};
use crate::view::{render_row, StockView};
use std::collections::HashMap;

/// Report from [`StockStore::verify`].
#[derive(Debug, Default, PartialEq)]
pub struct ConsistencyReport {
    /// Entries whose row is no longer attached.
    pub missing_rows: Vec<StockKey>,
    /// Entries whose row carries another key.
    pub mismatched_rows: Vec<StockKey>,
    /// Attached rows no entry points to.
    pub orphan_rows: Vec<RowHandle>,
}

impl ConsistencyReport {
    pub fn is_consistent(&self) -> bool {
        self.missing_rows.is_empty() && self.mismatched_rows.is_empty() && self.orphan_rows.is_empty()
    }
}

pub struct StockStore<V: StockView> {
    entries: HashMap<StockKey, StockEntry>,
    view: V,
    min_quantity: f64,
}

impl<V: StockView> StockStore<V> {
    pub fn new(view: V, min_quantity: f64) -> Self {
        Self {
            entries: HashMap::new(),
            view,
            min_quantity,
        }
    }

    pub fn min_quantity(&self) -> f64 {
        self.min_quantity
    }

    /// Adds `quantity` units of `name`.
    ///
    /// An unseen product gets a new entry and row. For a product already in stock
    /// the prompter is asked whether to add the quantity to the existing line.
    pub fn add(
        &mut self,
        name: &str,
        quantity: f64,
        prompter: &mut dyn Prompter,
    ) -> Result<AddOutcome> {
        let errors = validate(name, quantity, self.min_quantity);
        if !errors.is_empty() {
            return Err(StockzError::Validation(errors));
        }

        let display_name = name.trim();
        let key = StockKey::new(display_name);

        if let Some(existing) = self.entries.get(&key) {
            let merged = existing.quantity + quantity;
            if !is_valid_quantity(merged, self.min_quantity) {
                tracing::debug!(key = %key, quantity = merged, "merge rejected");
                return Err(StockzError::Validation(vec![merge_error(
                    &existing.display_name,
                )]));
            }

            let question = format!(
                "\"{}\" is already in stock. Add the given quantity?",
                display_name
            );
            if !prompter.confirm(&question) {
                tracing::debug!(key = %key, "merge declined");
                return Ok(AddOutcome::Unchanged);
            }

            self.set_quantity(&key, merged);
            tracing::debug!(key = %key, quantity = merged, "merged into existing entry");
            return Ok(AddOutcome::Merged { quantity: merged });
        }

        let row = self
            .view
            .append_row(render_row(&key, display_name, quantity));
        tracing::debug!(key = %key, %row, quantity, "inserted");
        self.entries.insert(
            key.clone(),
            StockEntry {
                key,
                display_name: display_name.to_string(),
                quantity,
                row,
            },
        );
        Ok(AddOutcome::Inserted)
    }

    /// Replaces the quantity of `key`.
    ///
    /// Returns false, changing nothing, when the key is not in stock or the
    /// quantity is not acceptable.
    pub fn update(&mut self, key: &StockKey, quantity: f64) -> bool {
        if !self.entries.contains_key(key) {
            tracing::debug!(key = %key, "update on unknown key ignored");
            return false;
        }
        if !is_valid_quantity(quantity, self.min_quantity) {
            tracing::debug!(key = %key, quantity, "update with invalid quantity ignored");
            return false;
        }
        self.set_quantity(key, quantity)
    }

    /// Removes `key` and detaches its row. Unknown keys are ignored.
    pub fn delete(&mut self, key: &StockKey) -> Option<StockEntry> {
        let entry = match self.entries.remove(key) {
            Some(entry) => entry,
            None => {
                tracing::debug!(key = %key, "delete on unknown key ignored");
                return None;
            }
        };
        self.view.remove_row(entry.row);
        tracing::debug!(key = %key, row = %entry.row, "deleted");
        Some(entry)
    }

    /// Shows the rows whose key contains the normalized `term`, hides the rest.
    ///
    /// Returns how many rows are visible afterwards.
    pub fn filter(&mut self, term: &str) -> usize {
        let needle = normalize(term);
        let mut visible = 0;
        for entry in self.entries.values() {
            let show = entry.key.matches(&needle);
            self.view.set_row_visible(entry.row, show);
            if show {
                visible += 1;
            }
        }
        tracing::debug!(term = %needle, visible, total = self.entries.len(), "filter applied");
        visible
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn total_quantity(&self) -> f64 {
        self.entries.values().map(|e| e.quantity).sum()
    }

    pub fn get(&self, key: &StockKey) -> Option<&StockEntry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &StockKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Entries in table order.
    pub fn entries(&self) -> Vec<&StockEntry> {
        let mut entries: Vec<&StockEntry> = self.entries.values().collect();
        entries.sort_by_key(|e| e.row);
        entries
    }

    /// Resolves a row back to the key of a live entry through its `data-key`.
    pub fn key_for_row(&self, row: RowHandle) -> Option<StockKey> {
        let key = self.view.row_key(row)?;
        self.entries.contains_key(key).then(|| key.clone())
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Checks the 1:1 correspondence between entries and attached rows.
    pub fn verify(&self) -> ConsistencyReport {
        let mut report = ConsistencyReport::default();

        for entry in self.entries() {
            match self.view.row_key(entry.row) {
                None => report.missing_rows.push(entry.key.clone()),
                Some(key) if key != &entry.key => report.mismatched_rows.push(entry.key.clone()),
                Some(_) => {}
            }
        }

        for handle in self.view.row_handles() {
            if !self.entries.values().any(|e| e.row == handle) {
                report.orphan_rows.push(handle);
            }
        }

        report
    }

    fn set_quantity(&mut self, key: &StockKey, quantity: f64) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.quantity = quantity;
                self.view
                    .set_row_quantity(entry.row, format_quantity(quantity));
                true
            }
            None => false,
        }
    }
}
