//! Markup contract.
//!
//! The page is wired to seven elements found by stable identifiers. A client
//! describes which of them it actually provides with a [`Markup`]; mounting logs
//! one error per missing element and carries on, and events aimed at a missing
//! element are never delivered.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    Form,
    ProductInput,
    QuantityInput,
    StockTable,
    SearchInput,
    StockLink,
    StockSection,
}

impl ElementId {
    pub const ALL: [ElementId; 7] = [
        ElementId::Form,
        ElementId::ProductInput,
        ElementId::QuantityInput,
        ElementId::StockTable,
        ElementId::SearchInput,
        ElementId::StockLink,
        ElementId::StockSection,
    ];

    /// Selector the element is looked up by.
    pub fn selector(&self) -> &'static str {
        match self {
            ElementId::Form => "form",
            ElementId::ProductInput => "#inProduct",
            ElementId::QuantityInput => "#inQuantity",
            ElementId::StockTable => "#bodyStockTable",
            ElementId::SearchInput => "#inSearch",
            ElementId::StockLink => "#linkStock",
            ElementId::StockSection => "#estoque",
        }
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.selector())
    }
}

/// The set of contract elements a client provides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    present: BTreeSet<ElementId>,
}

impl Default for Markup {
    fn default() -> Self {
        Self::complete()
    }
}

impl Markup {
    /// Every element present.
    pub fn complete() -> Self {
        Self {
            present: ElementId::ALL.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            present: BTreeSet::new(),
        }
    }

    pub fn with(mut self, id: ElementId) -> Self {
        self.present.insert(id);
        self
    }

    pub fn without(mut self, id: ElementId) -> Self {
        self.present.remove(&id);
        self
    }

    pub fn has(&self, id: ElementId) -> bool {
        self.present.contains(&id)
    }

    pub fn has_all(&self, ids: &[ElementId]) -> bool {
        ids.iter().all(|id| self.has(*id))
    }

    pub fn missing(&self) -> Vec<ElementId> {
        ElementId::ALL
            .into_iter()
            .filter(|id| !self.has(*id))
            .collect()
    }

    /// Logs an error for every missing element and returns how many were missing.
    pub fn check(&self) -> usize {
        let missing = self.missing();
        for id in &missing {
            tracing::error!(element = %id, "page element not found");
        }
        missing.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors() {
        let selectors: Vec<&str> = ElementId::ALL.iter().map(|id| id.selector()).collect();
        assert_eq!(
            selectors,
            vec![
                "form",
                "#inProduct",
                "#inQuantity",
                "#bodyStockTable",
                "#inSearch",
                "#linkStock",
                "#estoque"
            ]
        );
    }

    #[test]
    fn test_complete_markup_has_nothing_missing() {
        let markup = Markup::complete();
        assert!(markup.missing().is_empty());
        assert_eq!(markup.check(), 0);
    }

    #[test]
    fn test_missing_elements() {
        let markup = Markup::complete()
            .without(ElementId::SearchInput)
            .without(ElementId::StockLink);
        assert_eq!(
            markup.missing(),
            vec![ElementId::SearchInput, ElementId::StockLink]
        );
        assert_eq!(markup.check(), 2);
        assert!(!markup.has_all(&[ElementId::Form, ElementId::SearchInput]));
        assert!(markup.has_all(&[ElementId::Form, ElementId::StockTable]));
    }

    #[test]
    fn test_build_up_from_empty() {
        let markup = Markup::empty().with(ElementId::Form);
        assert!(markup.has(ElementId::Form));
        assert_eq!(markup.missing().len(), 6);
    }
}
