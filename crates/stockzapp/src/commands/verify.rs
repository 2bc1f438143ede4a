use crate::commands::{CmdMessage, CmdResult};
use crate::store::StockStore;
use crate::view::StockView;

/// Reports any break in the one-entry-one-row correspondence.
pub fn run<V: StockView>(store: &StockStore<V>) -> CmdResult {
    let report = store.verify();
    let mut result = CmdResult::default();

    if report.is_consistent() {
        result.add_message(CmdMessage::success(format!(
            "Stock is consistent ({} entries)",
            store.count()
        )));
        return result;
    }

    for key in &report.missing_rows {
        result.add_message(CmdMessage::error(format!("No row for entry: {}", key)));
    }
    for key in &report.mismatched_rows {
        result.add_message(CmdMessage::error(format!(
            "Row of entry {} carries another key",
            key
        )));
    }
    for row in &report.orphan_rows {
        result.add_message(CmdMessage::warning(format!("Row without entry: {}", row)));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::prompt::ScriptedPrompter;
    use crate::view::TableView;

    #[test]
    fn consistent_after_mutations() {
        let mut store = StockStore::new(TableView::new(), 1.0);
        let mut yes = ScriptedPrompter::always_yes();
        store.add("Arroz", 5.0, &mut yes).unwrap();
        store.add("Feijão", 1.0, &mut yes).unwrap();
        store.add("arroz", 1.0, &mut yes).unwrap();
        store.delete(&crate::model::StockKey::new("feijao"));

        let result = run(&store);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Stock is consistent (1 entries)");
    }
}
