use crate::commands::{display_entries, CmdResult};
use crate::store::StockStore;
use crate::view::StockView;

/// Every row in table order; hidden rows are included without a position.
pub fn run<V: StockView>(store: &StockStore<V>) -> CmdResult {
    CmdResult::default().with_rows(display_entries(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;
    use crate::view::TableView;

    #[test]
    fn includes_hidden_rows_without_index() {
        let mut store = StockStore::new(TableView::new(), 1.0);
        store.add("Arroz", 2.0, &mut ScriptedPrompter::new()).unwrap();
        store.add("Feijão", 3.0, &mut ScriptedPrompter::new()).unwrap();
        store.filter("feij");

        let result = run(&store);

        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.rows[0].index, None);
        assert_eq!(result.rows[1].index, Some(1));
    }
}
