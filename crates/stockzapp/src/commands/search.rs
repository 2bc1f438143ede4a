use crate::commands::{display_entries, CmdResult};
use crate::store::StockStore;
use crate::view::StockView;

/// Applies a search term and lists the rows left visible.
pub fn run<V: StockView>(store: &mut StockStore<V>, term: &str) -> CmdResult {
    let visible = store.filter(term);
    let rows = display_entries(store)
        .into_iter()
        .filter(|e| e.index.is_some())
        .collect();

    CmdResult {
        visible: Some(visible),
        ..CmdResult::default()
    }
    .with_rows(rows)
}
