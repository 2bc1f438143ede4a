//! # Domain Model
//!
//! This module defines the core data structures for stockz: [`StockKey`],
//! [`StockEntry`] and [`RowHandle`].
//!
//! ## Identity
//!
//! A product is identified by its **normalized name**, not by what the user typed.
//! `"Café"`, `"cafe"` and `" CAFÉ "` all produce the key `cafe` and therefore name
//! the same stock line. The display name shown in the table is the spelling used
//! on first insert.
//!
//! ## Entry ↔ Row
//!
//! Every entry is rendered as exactly one table row. The link is kept in both
//! directions without embedding UI nodes into domain state:
//! - the entry holds an opaque [`RowHandle`] to its row;
//! - the row carries the entry's key as data (`data-key`).

use crate::normalize::normalize;
use serde::Serialize;

/// Normalized product name, the unique identity of a stock line.
///
/// The only way to build one is through [`normalize`], so two keys compare
/// equal exactly when their source names are the same product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StockKey(String);

impl StockKey {
    pub fn new(name: &str) -> Self {
        Self(normalize(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substring match against an already-normalized search term.
    pub fn matches(&self, normalized_term: &str) -> bool {
        self.0.contains(normalized_term)
    }
}

impl std::fmt::Display for StockKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque reference to a rendered table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RowHandle(u64);

impl RowHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row-{}", self.0)
    }
}

/// A product line in stock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockEntry {
    pub key: StockKey,
    pub display_name: String,
    pub quantity: f64,
    pub row: RowHandle,
}

/// What [`crate::store::StockStore::add`] did with a submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AddOutcome {
    /// Unseen product: a new entry and row were created.
    Inserted,
    /// Existing product and the user accepted the merge.
    Merged { quantity: f64 },
    /// Existing product and the user declined the merge.
    Unchanged,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_normalized() {
        assert_eq!(StockKey::new(" Café ").as_str(), "cafe");
        assert_eq!(StockKey::new("CAFE"), StockKey::new("café"));
    }

    #[test]
    fn test_every_key_is_already_normalized() {
        for name in ["Café", "  FEIJÃO preto ", "cafe\u{301}", "Açúcar"] {
            let key = StockKey::new(name);
            assert_eq!(StockKey::new(key.as_str()), key);
            assert_eq!(key.as_str(), normalize(key.as_str()));
        }
    }

    #[test]
    fn test_key_matches_substring() {
        let key = StockKey::new("Arroz Integral");
        assert!(key.matches("arr"));
        assert!(key.matches("integral"));
        assert!(key.matches(""));
        assert!(!key.matches("feij"));
    }

    #[test]
    fn test_row_handle_display() {
        assert_eq!(RowHandle::new(7).to_string(), "row-7");
    }
}
