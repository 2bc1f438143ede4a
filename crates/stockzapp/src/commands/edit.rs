use crate::commands::{display_entry, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StockKey;
use crate::prompt::Prompter;
use crate::store::StockStore;
use crate::validation::{format_quantity, is_valid_quantity, parse_quantity, INVALID_QUANTITY};
use crate::view::StockView;

/// Asks for a new quantity of `key` and stores it.
///
/// A cancelled prompt changes nothing and says nothing. An answer that is not
/// a valid quantity is alerted.
pub fn run<V: StockView>(
    store: &mut StockStore<V>,
    key: &StockKey,
    prompter: &mut dyn Prompter,
) -> Result<CmdResult> {
    let (name, current) = match store.get(key) {
        Some(entry) => (entry.display_name.clone(), entry.quantity),
        None => {
            tracing::debug!(key = %key, "edit on stale key ignored");
            return Ok(CmdResult::default());
        }
    };

    let message = format!("Edit quantity of \"{}\":", name);
    let raw = match prompter.prompt(&message, &format_quantity(current)) {
        Some(raw) => raw,
        None => return Ok(CmdResult::default()),
    };

    let candidate = parse_quantity(&raw);
    if !is_valid_quantity(candidate, store.min_quantity()) {
        prompter.alert(INVALID_QUANTITY);
        return Ok(CmdResult::default());
    }

    let mut result = CmdResult::default();
    if store.update(key, candidate) {
        result.add_message(CmdMessage::success(format!(
            "Updated {}: {}",
            name,
            format_quantity(candidate)
        )));
        result.rows.extend(display_entry(store, key));
    }
    Ok(result)
}
