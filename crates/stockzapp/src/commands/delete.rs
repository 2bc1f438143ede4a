use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StockKey;
use crate::prompt::Prompter;
use crate::store::StockStore;
use crate::view::StockView;

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this product?";

pub fn run<V: StockView>(
    store: &mut StockStore<V>,
    key: &StockKey,
    prompter: &mut dyn Prompter,
) -> Result<CmdResult> {
    if !store.contains(key) {
        tracing::debug!(key = %key, "delete on stale key ignored");
        return Ok(CmdResult::default());
    }

    let mut result = CmdResult::default();
    if !prompter.confirm(CONFIRM_DELETE) {
        return Ok(result);
    }

    if let Some(entry) = store.delete(key) {
        result.add_message(CmdMessage::success(format!(
            "Deleted {}",
            entry.display_name
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{Dialog, ScriptedPrompter};
    use crate::view::TableView;

    fn stocked() -> StockStore<TableView> {
        let mut store = StockStore::new(TableView::new(), 1.0);
        store
            .add("Arroz", 5.0, &mut ScriptedPrompter::new())
            .unwrap();
        store
    }

    #[test]
    fn deletes_when_confirmed() {
        let mut store = stocked();
        let mut prompter = ScriptedPrompter::always_yes();

        let result = run(&mut store, &StockKey::new("Arroz"), &mut prompter).unwrap();

        assert_eq!(
            prompter.shown(),
            &[Dialog::Confirm(CONFIRM_DELETE.to_string())]
        );
        assert_eq!(result.messages[0].content, "Deleted Arroz");
        assert_eq!(store.count(), 0);
        assert!(store.view().is_empty());
    }

    #[test]
    fn keeps_entry_when_declined() {
        let mut store = stocked();
        let result = run(
            &mut store,
            &StockKey::new("arroz"),
            &mut ScriptedPrompter::new().confirm_with(false),
        )
        .unwrap();

        assert!(result.is_empty());
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn stale_key_asks_nothing() {
        let mut store = stocked();
        let mut prompter = ScriptedPrompter::always_yes();

        run(&mut store, &StockKey::new("feijao"), &mut prompter).unwrap();

        assert!(prompter.shown().is_empty());
        assert_eq!(store.count(), 1);
    }
}
