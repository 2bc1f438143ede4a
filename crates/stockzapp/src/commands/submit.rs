use crate::commands::{display_entry, CmdMessage, CmdResult};
use crate::error::{Result, StockzError};
use crate::model::{AddOutcome, StockKey};
use crate::prompt::Prompter;
use crate::store::StockStore;
use crate::validation::{format_quantity, parse_quantity, validate};
use crate::view::StockView;

/// Handles a product form submission from raw field values.
///
/// Invalid input is alerted as one message (one line per problem) and returned
/// as [`StockzError::Validation`]; nothing is stored.
pub fn run<V: StockView>(
    store: &mut StockStore<V>,
    raw_name: &str,
    raw_quantity: &str,
    prompter: &mut dyn Prompter,
) -> Result<CmdResult> {
    let name = raw_name.trim();
    let quantity = parse_quantity(raw_quantity);

    let errors = validate(name, quantity, store.min_quantity());
    if !errors.is_empty() {
        prompter.alert(&errors.join("\n"));
        return Err(StockzError::Validation(errors));
    }

    let outcome = match store.add(name, quantity, prompter) {
        Err(StockzError::Validation(errors)) => {
            prompter.alert(&errors.join("\n"));
            return Err(StockzError::Validation(errors));
        }
        other => other?,
    };
    let key = StockKey::new(name);
    let mut result = CmdResult::default();

    match outcome {
        AddOutcome::Inserted => {
            result.add_message(CmdMessage::success(format!(
                "Added {} ({})",
                name,
                format_quantity(quantity)
            )));
        }
        AddOutcome::Merged { quantity: total } => {
            let display_name = store
                .get(&key)
                .map(|e| e.display_name.as_str())
                .unwrap_or(name);
            result.add_message(CmdMessage::success(format!(
                "Added {} to {} (now {})",
                format_quantity(quantity),
                display_name,
                format_quantity(total)
            )));
        }
        AddOutcome::Unchanged => {
            result.add_message(CmdMessage::info(format!("{} left unchanged", name)));
        }
    }

    if outcome != AddOutcome::Unchanged {
        result.rows.extend(display_entry(store, &key));
    }
    Ok(result)
}
