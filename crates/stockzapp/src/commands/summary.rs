use crate::commands::{CmdResult, StockSummary};
use crate::store::StockStore;
use crate::view::StockView;

pub fn run<V: StockView>(store: &StockStore<V>) -> CmdResult {
    CmdResult {
        summary: Some(StockSummary {
            count: store.count(),
            total_quantity: store.total_quantity(),
        }),
        ..CmdResult::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;
    use crate::view::TableView;

    #[test]
    fn counts_hidden_rows_too() {
        let mut store = StockStore::new(TableView::new(), 1.0);
        store.add("Arroz", 5.0, &mut ScriptedPrompter::new()).unwrap();
        store.add("Café", 2.5, &mut ScriptedPrompter::new()).unwrap();
        store.filter("cafe");

        let summary = run(&store).summary.unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total_quantity, 7.5);
    }

    #[test]
    fn empty_stock() {
        let store = StockStore::new(TableView::new(), 1.0);
        let summary = run(&store).summary.unwrap();
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total_quantity, 0.0);
    }
}
