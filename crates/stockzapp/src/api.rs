//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single entry
//! point for stock operations, whatever the client.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`StockStore`]
//! - **Resolves selectors** typed by a user into stock keys
//! - **Dispatches** to the matching command and returns its [`CmdResult`]
//!
//! Business rules stay in `commands/*.rs`; the facade never prints.
//!
//! ## Selectors
//!
//! Rows are addressed either by position or by name:
//!
//! - **Position**: `N` (e.g. `1`, `3`) is the N-th *visible* row, counting from 1,
//!   the way the table reads on screen after a search.
//! - **Name**: anything else. The text is normalized and looked up as a key; if
//!   no product has exactly that key, a unique substring match on the keys is
//!   accepted (`"fei"` finds `feijao`). Several candidates is an error listing them.
//!
//! A product whose name is all digits can only be reached by position.

use crate::commands::{self, CmdResult};
use crate::error::{Result, StockzError};
use crate::model::{RowHandle, StockKey};
use crate::normalize::normalize;
use crate::prompt::Prompter;
use crate::store::StockStore;
use crate::view::StockView;

/// How a user pointed at a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowSelector {
    /// 1-based position among visible rows.
    Position(usize),
    /// Product name, matched after normalization.
    Name(String),
}

/// Parses user input into a [`RowSelector`].
pub fn parse_selector(input: &str) -> Result<RowSelector> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(StockzError::Api("Missing row selector".to_string()));
    }

    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        return match trimmed.parse::<usize>() {
            Ok(0) => Err(StockzError::Api("Row positions start at 1".to_string())),
            Ok(n) => Ok(RowSelector::Position(n)),
            Err(_) => Err(StockzError::UnknownRow(trimmed.to_string())),
        };
    }

    Ok(RowSelector::Name(trimmed.to_string()))
}

/// The main API facade for stock operations.
///
/// Generic over [`StockView`] so clients and tests choose how rows are held.
pub struct StockzApi<V: StockView> {
    store: StockStore<V>,
}

impl<V: StockView> StockzApi<V> {
    pub fn new(view: V, min_quantity: f64) -> Self {
        Self {
            store: StockStore::new(view, min_quantity),
        }
    }

    pub fn store(&self) -> &StockStore<V> {
        &self.store
    }

    pub fn submit(
        &mut self,
        name: &str,
        quantity: &str,
        prompter: &mut dyn Prompter,
    ) -> Result<CmdResult> {
        commands::submit::run(&mut self.store, name, quantity, prompter)
    }

    pub fn edit(&mut self, selector: &str, prompter: &mut dyn Prompter) -> Result<CmdResult> {
        let key = self.resolve(selector)?;
        self.edit_key(&key, prompter)
    }

    pub fn edit_key(&mut self, key: &StockKey, prompter: &mut dyn Prompter) -> Result<CmdResult> {
        commands::edit::run(&mut self.store, key, prompter)
    }

    pub fn delete(&mut self, selector: &str, prompter: &mut dyn Prompter) -> Result<CmdResult> {
        let key = self.resolve(selector)?;
        self.delete_key(&key, prompter)
    }

    pub fn delete_key(
        &mut self,
        key: &StockKey,
        prompter: &mut dyn Prompter,
    ) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, key, prompter)
    }

    pub fn search(&mut self, term: &str) -> CmdResult {
        commands::search::run(&mut self.store, term)
    }

    pub fn list(&self) -> CmdResult {
        commands::list::run(&self.store)
    }

    pub fn summary(&self) -> CmdResult {
        commands::summary::run(&self.store)
    }

    pub fn verify(&self) -> CmdResult {
        commands::verify::run(&self.store)
    }

    /// The live key behind a row, if the row is still attached.
    pub fn key_for_row(&self, row: RowHandle) -> Option<StockKey> {
        self.store.key_for_row(row)
    }

    /// Resolves a selector string to the key of an entry in stock.
    pub fn resolve(&self, selector: &str) -> Result<StockKey> {
        match parse_selector(selector)? {
            RowSelector::Position(n) => self.resolve_position(n),
            RowSelector::Name(name) => self.resolve_name(&name),
        }
    }

    /// Resolves a selector string to the row it points at.
    pub fn resolve_row(&self, selector: &str) -> Result<RowHandle> {
        let key = self.resolve(selector)?;
        self.store
            .get(&key)
            .map(|e| e.row)
            .ok_or_else(|| StockzError::UnknownRow(selector.to_string()))
    }

    fn resolve_position(&self, position: usize) -> Result<StockKey> {
        self.store
            .entries()
            .into_iter()
            .filter(|e| self.store.view().is_row_visible(e.row))
            .nth(position - 1)
            .map(|e| e.key.clone())
            .ok_or_else(|| StockzError::UnknownRow(position.to_string()))
    }

    fn resolve_name(&self, name: &str) -> Result<StockKey> {
        let exact = StockKey::new(name);
        if self.store.contains(&exact) {
            return Ok(exact);
        }

        let needle = normalize(name);
        let mut candidates: Vec<StockKey> = self
            .store
            .entries()
            .into_iter()
            .filter(|e| e.key.matches(&needle))
            .map(|e| e.key.clone())
            .collect();

        match candidates.len() {
            0 => Err(StockzError::UnknownRow(name.to_string())),
            1 => Ok(candidates.remove(0)),
            _ => {
                let names: Vec<&str> = candidates.iter().map(|k| k.as_str()).collect();
                Err(StockzError::Api(format!(
                    "\"{}\" matches several products: {}",
                    name,
                    names.join(", ")
                )))
            }
        }
    }
}
